/// An addressable, clearable collection of renderable overlay items.
///
/// Mirrors Leaflet's `layerGroup`: items are appended one at a time and
/// removed only in bulk. There is no deduplication; adding the same logical
/// item twice produces two renderings.
#[derive(Debug)]
pub struct OverlayGroup<T> {
    items: Vec<T>,
}

impl<T> OverlayGroup<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends one fully-constructed item to the group.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes every item. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Looks up one item by its index within the group.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for OverlayGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a OverlayGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_len() {
        let mut group = OverlayGroup::new();
        assert!(group.is_empty());

        group.add(1);
        group.add(2);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_get_by_index() {
        let mut group = OverlayGroup::new();
        group.add("a");
        group.add("b");
        assert_eq!(group.get(1), Some(&"b"));
        assert_eq!(group.get(2), None);
    }

    #[test]
    fn test_no_dedup() {
        let mut group = OverlayGroup::new();
        group.add("same");
        group.add("same");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut group = OverlayGroup::new();
        group.add(42);
        group.clear();
        assert!(group.is_empty());
        group.clear();
        assert!(group.is_empty());
    }
}
