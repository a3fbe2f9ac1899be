//! Macros for ergonomic machine definition.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a compact
/// state listing.
///
/// Each state lists `event => target` pairs. Identifiers become the state
/// and event names verbatim. The result is not validated; pass it to
/// [`Fsm::new`](crate::machine::Fsm::new) or call `validate()` first.
///
/// # Example
///
/// ```
/// use retrace::machine;
/// use retrace::machine::Fsm;
///
/// let config = machine! {
///     initial: off,
///     off { turnOn => on },
///     on { turnOff => off },
/// };
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("turnOn").unwrap();
/// assert_eq!(fsm.state(), "on");
/// ```
#[macro_export]
macro_rules! machine {
    (
        initial: $initial:ident,
        $(
            $state:ident { $($event:ident => $target:ident),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateGraph::new();
        $(
            states.insert(
                stringify!($state),
                $crate::core::StateDef::new()$(.on(stringify!($event), stringify!($target)))*,
            );
        )*
        $crate::core::MachineConfig::new(stringify!($initial), states)
    }};
}
