//! Wiring of the derivation pipeline into the state context.
//!
//! `ViewParamsState` is replaced only through [`apply_view_action`]; `DerivedViewCompute`
//! re-runs [`derive`] whenever the parameters or the fetched records change.

use std::any::{Any, TypeId};

use log::debug;
use userview_states::{
    Compute, ComputeDeps, Dep, State, StateCtx, Updater, assign_impl, state_assign_impl,
};

use crate::{
    BusinessConfig, DerivedView, FetchUsersCommand, UsersCompute, ViewAction, ViewParams, derive,
    filter_records, total_pages,
};

/// Current UI parameters.
#[derive(Debug, Clone, Default)]
pub struct ViewParamsState {
    pub params: ViewParams,
}

impl State for ViewParamsState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Cached [`DerivedView`] of the records for the current parameters.
#[derive(Debug, Clone, Default)]
pub struct DerivedViewCompute {
    pub view: DerivedView,
}

impl Compute for DerivedViewCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<ViewParamsState>()],
            vec![TypeId::of::<UsersCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let records = deps.get_compute_ref::<UsersCompute>().records();
        let params = &deps.get_state_ref::<ViewParamsState>().params;

        let view = derive(records, params);
        debug!(
            "DerivedViewCompute: {} of {} records match, page {}/{}",
            view.filtered.len(),
            records.len(),
            params.page_index,
            view.total_pages
        );
        updater.set(Self { view });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Register every state, compute and command of the users view.
pub fn register_user_view(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(ViewParamsState::default());
    ctx.record_compute(UsersCompute::default());
    ctx.record_compute(DerivedViewCompute::default());
    ctx.record_command(FetchUsersCommand);
}

/// Page count for the current records and parameters, independent of whether the
/// derived view has caught up yet.
fn current_total_pages(ctx: &StateCtx) -> usize {
    let params = &ctx.state::<ViewParamsState>().params;
    let records = ctx
        .cached::<UsersCompute>()
        .map(UsersCompute::records)
        .unwrap_or_default();
    total_pages(filter_records(records, &params.query).len(), params.page_size)
}

/// Reduce `action` into the stored parameters.
///
/// The state is only touched (and the view only recomputed) when the parameters change.
pub fn apply_view_action(ctx: &mut StateCtx, action: ViewAction) {
    let total_pages = current_total_pages(ctx);
    let current = &ctx.state::<ViewParamsState>().params;
    let next = current.reduce(action, total_pages);
    if next != *current {
        debug!("apply_view_action: {next:?}");
        ctx.state_mut::<ViewParamsState>().params = next;
    }
}

/// Keep `page_index` within the page count after the records were replaced.
pub fn reconcile_page(ctx: &mut StateCtx) {
    let total_pages = current_total_pages(ctx);
    let current = &ctx.state::<ViewParamsState>().params;
    let clamped = current.clamped(total_pages);
    if clamped != *current {
        debug!("reconcile_page: page {} no longer exists", current.page_index);
        ctx.state_mut::<ViewParamsState>().params = clamped;
    }
}
