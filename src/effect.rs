//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions.
///
/// The screen has nothing to do outside of its own state, so no variant exists and the
/// effect handler is statically unreachable.
#[derive(Debug, Clone)]
pub enum Effect {}
