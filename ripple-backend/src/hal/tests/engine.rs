//! Engine-generic test bodies, instantiated per backend next to the
//! backend they exercise. Callers serialize access to the engine cell.

use crate::{
    error::FftError,
    hal::{
        api::PlanNew,
        layouts::{Engine, EngineGuard, Plan},
        oep::PlanNewImpl,
    },
};

pub(crate) fn test_guard_pairs_global_lifecycle<B: Engine>() {
    let before: usize = B::cell().live();

    let guard: EngineGuard<B> = EngineGuard::acquire().unwrap();
    assert_eq!(B::cell().live(), before + 1);

    drop(guard);
    assert_eq!(B::cell().live(), before);
}

pub(crate) fn test_guard_release_order_is_free<B: Engine>() {
    let before: usize = B::cell().live();

    let g1: EngineGuard<B> = EngineGuard::acquire().unwrap();
    let g2: EngineGuard<B> = EngineGuard::acquire().unwrap();
    let g3: EngineGuard<B> = EngineGuard::acquire().unwrap();
    assert_eq!(B::cell().live(), before + 3);

    drop(g1);
    assert_eq!(B::cell().live(), before + 2);
    drop(g3);
    assert_eq!(B::cell().live(), before + 1);
    drop(g2);
    assert_eq!(B::cell().live(), before);
}

pub(crate) fn test_plan_reports_geometry<B>(context: &B::Context)
where
    B: Engine + PlanNewImpl<B>,
{
    let _guard: EngineGuard<B> = EngineGuard::acquire().unwrap();

    for lengths in [&[8u64][..], &[27], &[8, 9], &[4, 5, 5]] {
        let plan: Plan<B> = Plan::new(context, lengths).unwrap();
        assert_eq!(plan.dims(), lengths.len());
        assert_eq!(plan.lengths(), lengths);
        assert_eq!(plan.samples(), lengths.iter().product::<u64>());
    }
}

pub(crate) fn test_plan_rejects_bad_dimensionality<B>(context: &B::Context)
where
    B: Engine + PlanNewImpl<B>,
{
    let _guard: EngineGuard<B> = EngineGuard::acquire().unwrap();

    for lengths in [&[][..], &[4u64, 4, 4, 4]] {
        let result: Result<Plan<B>, FftError> = Plan::new(context, lengths);
        assert!(matches!(result, Err(FftError::Engine { .. })));
    }
}
