use clap::Subcommand;
use lotto_core::{DrawLedger, Result};

#[derive(Subcommand)]
pub enum TicketCommands {
    /// Buy a ticket for an active draw
    Buy {
        /// Draw id to buy against
        draw_id: i64,
        /// Five distinct numbers between 1 and 36
        #[arg(num_args = 5, value_name = "NUMBER")]
        numbers: Vec<u8>,
    },
}

pub async fn handle_ticket_command(cmd: TicketCommands, ledger: &DrawLedger) -> Result<()> {
    match cmd {
        TicketCommands::Buy { draw_id, numbers } => {
            let ticket_id = ledger.buy_ticket(draw_id, &numbers).await?;

            println!("Ticket purchased!");
            println!("  Id: {}", ticket_id);
            println!("  Draw: {}", draw_id);
        }
    }

    Ok(())
}
