//! ownlist-demo: fixed walkthrough of the ownership contract
//!
//! Drives the list through pushes, a mid-chain erase, a deep copy, and
//! teardown, printing each rendering plus a `~Node(<value>)` line per node
//! destruction. The full trace shows exactly one destruction per node ever
//! created: no leaks, no double frees.
//!
//! ## Configuration
//! - OWNLIST_LOG: tracing env-filter (default: "info")

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ownlist::{trace, List};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("OWNLIST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();
    trace::set_echo(true);

    let mut a = List::new();
    for v in [7, 5, 8, 2, 9, 4, 1] {
        a.push_front(v);
    }

    println!("{a}"); // [ 1 4 9 2 8 5 7 ]

    // erase() removes the successor of the node at index 2 (value 9),
    // destroying the node holding 2
    a.at_mut(2).expect("index 2 in range").erase();

    println!("{a}"); // [ 1 4 9 8 5 7 ]

    let b = a.clone();

    // removes the successor of index 3 (value 8) in the original only
    a.at_mut(3).expect("index 3 in range").erase();

    println!("{a}"); // [ 1 4 9 8 7 ]
    println!("{b}"); // [ 1 4 9 8 5 7 ]

    info!("dropping both lists");
    drop(a);
    drop(b);
}
