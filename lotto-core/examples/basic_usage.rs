use lotto_core::DrawLedger;
use tempfile::tempdir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Create temp dir
    let temp_dir = tempdir()?;
    println!("Using temporary directory: {:?}", temp_dir.path());

    // Open the ledger
    let ledger = DrawLedger::new(temp_dir.path()).await?;

    println!("Opening a draw...");
    let draw = ledger.create_draw().await?;
    println!("Draw {} is {}", draw.id, draw.status);

    // Sell a few tickets
    let t1 = ledger.buy_ticket(draw.id, &[4, 8, 15, 16, 23]).await?;
    let t2 = ledger.buy_ticket(draw.id, &[36, 1, 12, 7, 29]).await?;
    println!("Sold tickets {} and {}", t1, t2);

    // Close the draw and sample winning numbers
    let closed = ledger.close_draw(draw.id).await?;
    if let Some(winning) = &closed.winning_numbers {
        println!("Winning numbers: {}", winning);
    }

    // Read results back
    let results = ledger.get_results(draw.id).await?;
    println!("\nTickets sold: {}", results.tickets.len());
    for ticket in &results.tickets {
        println!("  Ticket {}: {}", ticket.id, ticket.numbers);
    }

    println!("\nExample completed successfully!");

    Ok(())
}
