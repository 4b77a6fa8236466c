/// How a [`Reader`](crate::Reader) treats a described value whose descriptor
/// does not match the one the schema declares for its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptorPolicy {
    /// Report a [`DecodeError::DescriptorMismatch`](corda_amqp_core::DecodeError::DescriptorMismatch) (default).
    #[default]
    Strict,
    /// Log the mismatch and decode the value with the declared type anyway.
    Lenient,
}
