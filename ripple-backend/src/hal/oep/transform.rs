use crate::{
    error::FftError,
    hal::layouts::{Direction, Engine, Plan},
};

pub unsafe trait TransformEnqueueImpl<B: Engine> {
    fn transform_enqueue_impl(
        plan: &Plan<B>,
        direction: Direction,
        queues: &[B::Queue],
        input: &B::Buffer,
        output: &B::Buffer,
    ) -> Result<(), FftError>;
}
