use crate::mvu::picker::{Deps, Msg, PickerModel, run_effect, update};

/// Runs the MVU loop for the picker: seeds with `msg` and drains effects.
/// Backend failures come back as messages, so the loop always settles.
pub async fn run_picker(model: &mut PickerModel, msg: Msg, deps: Deps<'_>) {
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        let next = update(model, msg);
        effects.extend(next);
    }
}
