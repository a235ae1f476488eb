use crate::{
    error::FftError,
    hal::layouts::{Direction, Engine},
};

pub trait TransformEnqueue<B: Engine> {
    /// Enqueues one transform on the given queues with no wait list and no
    /// completion event. Returns once the work is queued; completion
    /// ordering is whatever the queue guarantees.
    fn enqueue_transform(
        &self,
        direction: Direction,
        queues: &[B::Queue],
        input: &B::Buffer,
        output: &B::Buffer,
    ) -> Result<(), FftError>;
}
