use super::ErrorChain;
use core::fmt::Display;

impl<E: Display> Display for ErrorChain<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.stack_trace())
    }
}

impl<E> std::error::Error for ErrorChain<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.base.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl<E> From<E> for ErrorChain<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E> Default for ErrorChain<E> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
