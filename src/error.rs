//! Error handling primitives for the LIS3DH driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
///
/// Every failure originates in the bus transport and is reported verbatim. A
/// failed burst is a failure of the whole transfer, even if the transport moved
/// some of the bytes before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Bus(err)
    }
}
