//! Human-readable signatures for decoded calls and events.
//!
//! These are display strings, not the canonical form hashed into selectors
//! and topics: argument names are included, and event signatures mark each
//! indexed argument with its topic position.

use alloy_json_abi::{Event, Function};

fn typed_arg(ty: &str, name: &str) -> String {
    if name.is_empty() {
        ty.to_string()
    } else {
        format!("{ty} {name}")
    }
}

/// `transfer(address to, uint256 amount)`
pub fn function_signature(func: &Function) -> String {
    let args: Vec<String> = func
        .inputs
        .iter()
        .map(|p| typed_arg(&p.selector_type(), &p.name))
        .collect();
    format!("{}({})", func.name, args.join(", "))
}

/// `Transfer(index_topic_1 address from, index_topic_2 address to, uint256 value)`
///
/// Indexed arguments are numbered from 1 in declaration order, matching
/// their position in the log's topic list.
pub fn event_signature(event: &Event) -> String {
    let mut topic = 0;
    let args: Vec<String> = event
        .inputs
        .iter()
        .map(|p| {
            let arg = typed_arg(&p.selector_type(), &p.name);
            if p.indexed {
                topic += 1;
                format!("index_topic_{topic} {arg}")
            } else {
                arg
            }
        })
        .collect();
    format!("{}({})", event.name, args.join(", "))
}
