use crate::{
    error::FftError,
    hal::{
        api::TransformEnqueue,
        layouts::{Direction, Engine, Plan},
        oep::TransformEnqueueImpl,
    },
};

impl<B> TransformEnqueue<B> for Plan<B>
where
    B: Engine + TransformEnqueueImpl<B>,
{
    fn enqueue_transform(
        &self,
        direction: Direction,
        queues: &[B::Queue],
        input: &B::Buffer,
        output: &B::Buffer,
    ) -> Result<(), FftError> {
        B::transform_enqueue_impl(self, direction, queues, input, output)
    }
}
