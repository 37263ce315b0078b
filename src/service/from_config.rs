use std::error::Error;

/// Create a speech backend from provided config, possibly failing to do so.
///
/// This is an async version of [`TryFrom`].
///
/// [`TryFrom`]: std::convert::TryFrom
pub trait FromConfig<'c>
where
    Self: Sized,
{
    type Config: 'c;

    type Error: Error + Send + Sync + 'static;

    async fn from_config(config: Self::Config) -> Result<Self, Self::Error>;
}
