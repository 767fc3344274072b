use bevy::math::DVec2;

/// Stable identifier of a polyline within a [`Drawing`].
///
/// Identifiers are assigned on insertion and never reused by the same drawing.
/// They are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolylineId(pub u64);

/// An open polyline on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub id: PolylineId,
    pub points: Vec<DVec2>,
    pub thickness: f32,
    pub color: String,
}

/// Ordered collection of polylines, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    polylines: Vec<Polyline>,
    next_id: u64,
}

impl Drawing {
    /// Append a polyline and return its new id
    pub fn push(
        &mut self,
        points: Vec<DVec2>,
        color: impl Into<String>,
        thickness: f32,
    ) -> PolylineId {
        let id = PolylineId(self.next_id);
        self.next_id += 1;
        self.polylines.push(Polyline {
            id,
            points,
            thickness,
            color: color.into(),
        });
        id
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn get(&self, id: PolylineId) -> Option<&Polyline> {
        self.polylines.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PolylineId) -> Option<&mut Polyline> {
        self.polylines.iter_mut().find(|p| p.id == id)
    }

    /// Position of a polyline in drawing order
    pub fn index_of(&self, id: PolylineId) -> Option<usize> {
        self.polylines.iter().position(|p| p.id == id)
    }

    /// Remove a polyline by id, returning it if it was present
    pub fn remove(&mut self, id: PolylineId) -> Option<Polyline> {
        let index = self.index_of(id)?;
        Some(self.polylines.remove(index))
    }

    pub fn clear(&mut self) {
        self.polylines.clear();
    }
}
