/// What [`Tree::delete_entry`][crate::Tree] did to the backing array.
pub(crate) struct Removal<T> {
    /// The element that left the tree.
    pub(crate) element: T,
    /// The slot index that was vacated. This is not always the slot that held `element`: a node
    /// with one child is replaced in place by that child, vacating the child's old slot.
    pub(crate) freed: usize,
    /// The target slot had two children and now holds its successor's element.
    pub(crate) relocated: bool,
}
