use crate::error::{Error, Result};
use crate::generator::Draw;

/// Overwrites every element of `slice`, in order, with one draw each.
///
/// Consumes exactly `slice.len()` draws and never touches the length.
/// No-op on an empty slice.
pub fn fill_existing<G: Draw>(slice: &mut [G::Value], generator: &mut G) {
    for slot in slice.iter_mut() {
        *slot = generator.next();
    }
}

/// Appends exactly `count` drawn elements to `vec`, in draw order.
///
/// The count is validated before anything is drawn or appended, so on
/// [`Error::InvalidCount`] the vector is untouched. `count == 0` is a
/// valid no-op.
pub fn append_generated<G: Draw>(
    vec: &mut Vec<G::Value>,
    count: isize,
    generator: &mut G,
) -> Result<()> {
    let Ok(count) = usize::try_from(count) else {
        return Err(Error::InvalidCount { count });
    };

    vec.reserve(count);

    for _ in 0..count {
        vec.push(generator.next());
    }

    Ok(())
}
