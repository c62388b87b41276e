use super::Fragment;

/// Producer side of the pipeline: projects a scene into drawable fragments.
///
/// Implementations own the traversal and the camera/view mathematics; this
/// crate only requires that every emitted fragment arrives fully projected,
/// with screen-plane coordinates and a camera-space depth per point.
pub trait FragmentSource {
    /// Appends this source's fragments to `out`.
    ///
    /// Called once per render with a cleared buffer. Emission order does not
    /// matter; drawing order is established by the depth sort.
    fn emit_fragments(&self, out: &mut Vec<Fragment>);
}
