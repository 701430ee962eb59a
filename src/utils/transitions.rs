use std::time::Duration;

use gpui::{App, ElementId, Window, ease_out_quint};
use gpui_transitions::{Transition, TransitionGoal, WindowUseTransition};

/// A keyed transition that eases towards `goal`.
///
/// A zero `duration` lands on the goal the first time the transition is drawn.
pub fn goal_transition<T: TransitionGoal + Clone + PartialEq + 'static>(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    goal: T,
) -> Transition<T> {
    let transition = window
        .use_keyed_transition(id, cx, duration, |_window, _cx| goal.clone())
        .with_easing(ease_out_quint());

    transition.update(cx, |this, cx| {
        if *this != goal {
            *this = goal;
            cx.notify();
        }
    });

    transition
}
