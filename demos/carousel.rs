//! Renders a three-slide carousel with a checkbox below it and prints the
//! markup, the deferred activations and the assets a page must link.
//!
//! Run with `RUST_LOG=tessera_core=trace` to watch the lifecycle.

use tessera::widgets::{carousel, carousel_caption, carousel_item, checkbox};
use tessera::{AssetRegistry, Node};
use tracing_subscriber::EnvFilter;

fn slide(n: usize, title: &str) -> Node {
    carousel_item::new()
        .with_id(format!("slide{n}"))
        .with_child(Node::text(format!("[image {n}]")))
        .with_child(carousel_caption::new().with_child(Node::text(title)))
}

fn main() -> Result<(), tessera::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = tessera::default_engine()?;

    let mut assets = AssetRegistry::new();
    engine.registry().register_assets(&mut assets);

    let mut page = vec![
        carousel::new()
            .with_id("gallery")
            .with_attr(carousel::ACTIVE_INDEX, 1)
            .with_attr(carousel::INTERVAL, 3000)
            .with_attr("tooltip", "Drag or use the arrows")
            .with_children([slide(0, "Harbour"), slide(1, "Old town"), slide(2, "Cliffs")]),
        checkbox::new()
            .with_id("subscribe")
            .with_attr(checkbox::CAPTION, "Email me new photos")
            .with_attr("onchange", "toggleSubscription(this)"),
    ];

    let mut out: Vec<u8> = Vec::new();
    let mut deferred = Vec::new();
    for node in &mut page {
        let summary = engine.render(node, &mut out)?;
        out.push(b'\n');
        deferred.extend(summary.deferred);
    }
    println!("{}", String::from_utf8_lossy(&out));

    println!("activate: {}", deferred.join(" "));
    println!("assets: {}", assets.iter().collect::<Vec<_>>().join(", "));
    Ok(())
}
