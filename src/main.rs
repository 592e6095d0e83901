//! Limit Book - demo binary
//!
//! Replays a short session against one book and prints the book after each
//! step. Set `RUST_LOG=limit_book=debug` (or `trace`) to see the book's own
//! log output; `BOOK_ORDER_CAPACITY` sizes the book.

use limit_book::{Admission, BookConfig, Order, OrderBook, Side};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BookConfig::from_env()?;
    let mut book = OrderBook::with_config(&config);

    println!("===========================================");
    println!("  Limit Book (capacity {})", config.order_capacity);
    println!("===========================================");

    for order in [
        Order::limit(1, Side::Bid, 10, 2).with_venue("T"),
        Order::limit(2, Side::Bid, 9, 2).with_venue("T"),
        Order::limit(3, Side::Offer, 12, 2).with_venue("T"),
        Order::limit(4, Side::Offer, 11, 2).with_venue("T"),
    ] {
        book.add_order(&order)?;
    }
    print_top(&book);

    println!("\nAmend order 4 to 3 units");
    book.update_order(4, 3);
    print_top(&book);

    println!("\nMarket offer for 3 units");
    if let Admission::Executed(result) = book.add_order(&Order::market(100, Side::Offer, 3))? {
        for fill in &result.fills {
            println!(
                "  fill: order {} @ {} executed {} (was {})",
                fill.order_id(),
                fill.price(),
                fill.executed,
                fill.resting.quantity,
            );
        }
        println!("  notional: {}", result.fills.iter().map(|f| f.notional()).sum::<u128>());
        println!("  unfilled: {}", result.remaining);
    }
    print_top(&book);

    println!("\nCancel order 3");
    book.delete_order(3);
    print_top(&book);

    println!("\nState root: {}", book.state_root_hex()?);
    Ok(())
}

fn print_top(book: &OrderBook) {
    let show = |order: Option<Order>| match order {
        Some(o) => format!("#{} {} x {}", o.id, o.price, o.quantity),
        None => "-".to_string(),
    };
    println!("  best bid:   {}", show(book.best_bid()));
    println!("  best offer: {}", show(book.best_offer()));
}
