//! Running a routing tree against an eventual response

mod completion;
mod response;

pub use completion::Completion;
pub use response::ResponseDispatcher;

pub(crate) use response::InFlight;

use std::sync::Arc;

use eddy_client::error::CallSite;

use crate::binding::{Attribute, Binding};
use crate::router::RoutingTree;
use crate::selector::Selector;

/// Something that will run a routing tree once its response is available.
pub trait Dispatcher: Sized {
    /// Route the eventual response through `tree`.
    #[track_caller]
    fn call<A: Attribute>(self, tree: RoutingTree<A>) -> Completion;

    /// Build a tree from `selector` and `bindings`, then [`call`](Dispatcher::call) it.
    ///
    /// A tree that fails to build (duplicate attributes) fails the returned completion, with
    /// this call site attached.
    #[track_caller]
    fn dispatch<A, S>(
        self,
        selector: S,
        bindings: impl IntoIterator<Item = Binding<A>>,
    ) -> Completion
    where
        A: Attribute,
        S: Selector<A> + 'static,
    {
        match RoutingTree::new(selector, bindings) {
            Ok(tree) => self.call(tree),
            Err(error) => {
                Completion::failed(error.with_call_site(Arc::new(CallSite::capture())))
            }
        }
    }
}
