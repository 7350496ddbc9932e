/// A user intent (command abstraction).
///
/// Commands represent **intent**, e.g. "put this catalog entry in the cart".
/// They are transient and are turned into events by a [`CommandHandler`].
///
/// ## Command vs Event
///
/// - **Command**: Intent to do something (e.g. "add Red Guava to the cart")
/// - **Event**: Fact that something happened (e.g. "ItemAdded at position 3")
///
/// Commands must own all their data so they can be logged, cloned and
/// carried across the HTTP boundary.
///
/// [`CommandHandler`]: crate::CommandHandler
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable command name used in logs (e.g. "cart.add").
    fn command_type(&self) -> &'static str;
}
