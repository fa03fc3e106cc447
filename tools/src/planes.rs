use clap::Args;
use evalboards::encoding::piece_at_slot;
use evalboards::{encode, to_array_planes};
use shakmaty::fen::Fen;
use std::error::Error;

#[derive(Args)]
pub struct PlanesCommand {
    /// Position to print the planes of
    #[arg(long, value_name = "fen")]
    fen: String,
}

/// Prints the 12 bitboards of a position and their 8x8 planes, rank 8 on top
pub fn planes(cmd: PlanesCommand) -> Result<(), Box<dyn Error>> {
    let setup = cmd.fen.parse::<Fen>()?.into_setup();
    let bitboards = encode(&setup.board);

    for (slot, plane) in to_array_planes(&bitboards).iter().enumerate() {
        println!("{} {:#018x}", piece_at_slot(slot).char(), bitboards[slot]);

        for row in plane.iter().rev() {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            println!("  {}", cells.join(" "));
        }
    }

    Ok(())
}
