use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{DrawLedger, Result};

#[derive(Subcommand)]
pub enum DrawCommands {
    /// Open a new draw
    Open,
    /// Close a draw and sample its winning numbers
    Close {
        /// Draw id
        draw_id: i64,
    },
    /// Show winning numbers and sold tickets for a draw
    Results {
        /// Draw id
        draw_id: i64,
    },
}

pub async fn handle_draw_command(cmd: DrawCommands, ledger: &DrawLedger) -> Result<()> {
    match cmd {
        DrawCommands::Open => {
            let draw = ledger.create_draw().await?;

            println!("Draw opened!");
            println!("  Id: {}", draw.id);
            println!("  Status: {}", draw.status);
        }

        DrawCommands::Close { draw_id } => {
            println!("Closing draw {}...", draw_id);
            let draw = ledger.close_draw(draw_id).await?;

            println!("Draw {} closed", draw.id);
            if let Some(winning) = &draw.winning_numbers {
                println!("Winning numbers: {}", winning);
            }
        }

        DrawCommands::Results { draw_id } => {
            let results = ledger.get_results(draw_id).await?;

            match &results.winning_numbers {
                Some(winning) => println!("Winning numbers: {}", winning),
                None => println!("Winning numbers: not drawn yet"),
            }

            if results.tickets.is_empty() {
                println!("No tickets sold for draw {}", draw_id);
            } else {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(vec!["Ticket", "Numbers", "Purchased"]);

                for ticket in &results.tickets {
                    table.add_row(vec![
                        ticket.id.to_string(),
                        ticket.numbers.to_string(),
                        ticket.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    ]);
                }

                println!("{table}");
            }
        }
    }

    Ok(())
}
