pub mod draw;
pub mod ticket;

pub use draw::{handle_draw_command, DrawCommands};
pub use ticket::{handle_ticket_command, TicketCommands};
