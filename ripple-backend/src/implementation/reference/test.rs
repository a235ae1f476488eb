use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    hal::{
        api::{BufferAlloc, BufferRead, BufferWrite, PlanNew, PlanSetLayout, PlanSetPlacement, PlanSetPrecision, TransformEnqueue},
        layouts::{Complex32, Direction, Engine, EngineGuard, MemLayout, Placement, Plan, Precision},
        tests::{
            test_guard_pairs_global_lifecycle, test_guard_release_order_is_free,
            test_plan_rejects_bad_dimensionality, test_plan_reports_geometry,
        },
    },
    implementation::reference::{PlanState, RefBuffer, RefContext, RefFft, RefQueue, plan_state, status},
};

// The engine cell and ready flag are process-global; tests touching them
// take this lock so the harness threads cannot interleave lifecycles.
static ENGINE_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    ENGINE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn ramp(len: usize) -> Vec<Complex32> {
    (0..len)
        .map(|i| Complex32::new(i as f32 + 1.0, -(i as f32)))
        .collect()
}

#[test]
fn test_guard_pairs_global_lifecycle_reference() {
    let _held = lock();
    test_guard_pairs_global_lifecycle::<RefFft>();
}

#[test]
fn test_guard_release_order_is_free_reference() {
    let _held = lock();
    test_guard_release_order_is_free::<RefFft>();
}

#[test]
fn test_plan_reports_geometry_reference() {
    let _held = lock();
    test_plan_reports_geometry::<RefFft>(&RefContext::new());
}

#[test]
fn test_plan_rejects_bad_dimensionality_reference() {
    let _held = lock();
    test_plan_rejects_bad_dimensionality::<RefFft>(&RefContext::new());
}

#[test]
fn test_plan_rejects_non_smooth_length() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    for lengths in [&[7u64][..], &[8, 7], &[4, 5, 11]] {
        let result = Plan::<RefFft>::new(&RefContext::new(), lengths);
        assert_eq!(
            result.err().and_then(|e| e.status()),
            Some(status::INVALID_SIZE)
        );
    }
}

#[test]
fn test_plan_creation_requires_setup() {
    let _held = lock();

    let result = Plan::<RefFft>::new(&RefContext::new(), &[8]);
    assert_eq!(
        result.err().and_then(|e| e.status()),
        Some(status::NOT_INITIALIZED)
    );
}

#[test]
fn test_plan_records_configuration_calls() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let plan: Plan<RefFft> = Plan::new(&RefContext::new(), &[8, 9]).unwrap();
    let state: PlanState = plan_state(&plan);
    assert_eq!(state.lengths, vec![8, 9]);
    assert_eq!(state.precision, None);
    assert_eq!(state.layout, None);
    assert_eq!(state.placement, None);
    assert_eq!(state.enqueues, 0);

    plan.set_precision(Precision::Single).unwrap();
    plan.set_layout(MemLayout::Interleaved, MemLayout::Interleaved).unwrap();
    plan.set_placement(Placement::InPlace).unwrap();

    let state: PlanState = plan_state(&plan);
    assert_eq!(state.precision, Some(Precision::Single));
    assert_eq!(state.layout, Some((MemLayout::Interleaved, MemLayout::Interleaved)));
    assert_eq!(state.placement, Some(Placement::InPlace));
}

#[test]
fn test_enqueue_transforms_between_buffers() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let context = RefContext::new();
    let queue = RefQueue::new(context);
    let plan: Plan<RefFft> = Plan::new(&context, &[8]).unwrap();

    let input: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    let output: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    let data = ramp(8);
    RefFft::buffer_write(&input, &data).unwrap();

    plan.enqueue_transform(Direction::Forward, &[queue.clone()], &input, &output)
        .unwrap();

    let state: PlanState = plan_state(&plan);
    assert_eq!(state.last_direction, Some(Direction::Forward));
    assert_eq!(state.enqueues, 1);

    // DC bin of the forward transform is the sum of the input.
    let spectrum = RefFft::buffer_read(&output).unwrap();
    let sum = data.iter().fold(Complex32::ZERO, |acc, x| acc + *x);
    assert!((spectrum[0] - sum).abs() < 1e-4);

    // The input buffer is left untouched by an out-of-place run.
    assert_eq!(RefFft::buffer_read(&input).unwrap(), data);

    RefFft::release_buffer(&input);
    RefFft::release_buffer(&output);
}

#[test]
fn test_enqueue_rejects_freed_buffer() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let context = RefContext::new();
    let queue = RefQueue::new(context);
    let plan: Plan<RefFft> = Plan::new(&context, &[8]).unwrap();

    let input: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    let output: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    RefFft::release_buffer(&input);

    let result = plan.enqueue_transform(Direction::Forward, &[queue], &input, &output);
    assert_eq!(
        result.err().and_then(|e| e.status()),
        Some(status::INVALID_BUFFER)
    );
    assert_eq!(plan_state(&plan).enqueues, 0);

    RefFft::release_buffer(&output);
}

#[test]
fn test_enqueue_rejects_size_mismatch() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let context = RefContext::new();
    let queue = RefQueue::new(context);
    let plan: Plan<RefFft> = Plan::new(&context, &[8]).unwrap();

    let input: RefBuffer = RefFft::buffer_alloc(4).unwrap();
    let output: RefBuffer = RefFft::buffer_alloc(8).unwrap();

    let result = plan.enqueue_transform(Direction::Forward, &[queue], &input, &output);
    assert_eq!(
        result.err().and_then(|e| e.status()),
        Some(status::SIZE_MISMATCH)
    );

    RefFft::release_buffer(&input);
    RefFft::release_buffer(&output);
}

#[test]
fn test_enqueue_rejects_empty_queue_set() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let context = RefContext::new();
    let plan: Plan<RefFft> = Plan::new(&context, &[8]).unwrap();

    let input: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    let output: RefBuffer = RefFft::buffer_alloc(8).unwrap();

    let result = plan.enqueue_transform(Direction::Forward, &[], &input, &output);
    assert_eq!(
        result.err().and_then(|e| e.status()),
        Some(status::INVALID_QUEUE)
    );

    RefFft::release_buffer(&input);
    RefFft::release_buffer(&output);
}

#[test]
fn test_in_place_enqueue_overwrites_the_buffer() {
    let _held = lock();
    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();

    let context = RefContext::new();
    let queue = RefQueue::new(context);
    let plan: Plan<RefFft> = Plan::new(&context, &[8]).unwrap();
    plan.set_placement(Placement::InPlace).unwrap();

    let buffer: RefBuffer = RefFft::buffer_alloc(8).unwrap();
    let data = ramp(8);
    RefFft::buffer_write(&buffer, &data).unwrap();

    plan.enqueue_transform(Direction::Forward, &[queue], &buffer, &buffer)
        .unwrap();

    assert_ne!(RefFft::buffer_read(&buffer).unwrap(), data);

    RefFft::release_buffer(&buffer);
}
