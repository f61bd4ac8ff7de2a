//! Output write requests and the elementwise kernels built on them.

use crate::{common::*, element::Element};

/// Describes how a computed value combines with the existing output element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WriteRequest {
    /// Store the value, discarding the previous content.
    Overwrite,
    /// Store the value into an output that aliases the input.
    InPlace,
    /// Add the value to the previous content.
    Accumulate,
    /// Leave the output untouched.
    Skip,
}

impl WriteRequest {
    /// Commits `value` into `out` according to the request.
    #[inline]
    pub fn assign<T>(self, out: &mut T, value: T)
    where
        T: Element,
    {
        match self {
            Self::Overwrite | Self::InPlace => *out = value,
            Self::Accumulate => *out = out.accumulate(value),
            Self::Skip => {}
        }
    }
}

impl Default for WriteRequest {
    fn default() -> Self {
        Self::Overwrite
    }
}

impl Display for WriteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Overwrite => "overwrite",
            Self::InPlace => "in-place",
            Self::Accumulate => "accumulate",
            Self::Skip => "skip",
        };
        write!(f, "{}", text)
    }
}

/// Maps every input element with `f` and commits the results into `output`.
pub fn assign_map<T, F>(
    output: ArrayViewMut3<'_, T>,
    input: ArrayView3<'_, T>,
    req: WriteRequest,
    f: F,
) -> Result<()>
where
    T: Element,
    F: Fn(T) -> T,
{
    ensure!(
        output.shape() == input.shape(),
        "output shape {:?} does not match input shape {:?}",
        output.shape(),
        input.shape()
    );

    if req == WriteRequest::Skip {
        return Ok(());
    }

    Zip::from(output)
        .and(input)
        .for_each(|out, &value| req.assign(out, f(value)));

    Ok(())
}

/// Maps every RGB pixel of a 3-channel input with `f` and commits the
/// results into `output`.
pub fn assign_map_pixels<T, F>(
    mut output: ArrayViewMut3<'_, T>,
    input: ArrayView3<'_, T>,
    req: WriteRequest,
    f: F,
) -> Result<()>
where
    T: Element,
    F: Fn([T; 3]) -> [T; 3],
{
    ensure!(
        output.shape() == input.shape(),
        "output shape {:?} does not match input shape {:?}",
        output.shape(),
        input.shape()
    );
    let channels = input.len_of(Axis(0));
    ensure!(
        channels == 3,
        "channel size must be 3, but get {}",
        channels
    );

    if req == WriteRequest::Skip {
        return Ok(());
    }

    Zip::from(output.lanes_mut(Axis(0)))
        .and(input.lanes(Axis(0)))
        .for_each(|mut out, pixel| {
            let values = f([pixel[0], pixel[1], pixel[2]]);
            out.iter_mut()
                .zip(values)
                .for_each(|(out, value)| req.assign(out, value));
        });

    Ok(())
}
