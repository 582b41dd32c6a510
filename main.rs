/* Copyright 2018, 2023 Torbjørn Birch Moltu
 *
 * This file is part of drag_and_drop.
 * You can redistribute it and/or modify it under the terms of the
 * GNU General Public License as published by the Free Software Foundation,
 * either version 3 of the License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#![cfg_attr(windows, windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process;

use clap::Parser;
use engine::assets::{self, EncodedImage};
use game::DragAndDrop;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "drag_and_drop", about = "Drag images around with the mouse")]
struct Options {
    /// Load images from this directory instead of the bundled ones.
    #[arg(long, env = "DRAG_AND_DROP_IMAGES")]
    images: Option<PathBuf>,

    /// How many sprites to create of every image.
    #[arg(long, env = "DRAG_AND_DROP_COPIES", default_value_t = game::COPIES_PER_IMAGE)]
    copies: usize,

    /// Seed for placing the sprites; random if not set.
    #[arg(long, env = "DRAG_AND_DROP_SEED")]
    seed: Option<u64>,
}

fn encoded_images(options: &Options) -> Vec<EncodedImage> {
    let Some(dir) = &options.images else {
        return assets::embedded(game::images::EMBEDDED);
    };
    match assets::read_dir(dir) {
        Ok(images) => images,
        Err(e) => {
            // without images there is nothing to do
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let options = Options::parse();

    let encoded = encoded_images(&options);
    let images = assets::decode(&encoded);
    info!("Loaded {} of {} images", images.len(), encoded.len());

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = DragAndDrop::new(&assets::sizes(&images), options.copies, &mut rng);
    engine::start(game, game::NAME, game::INITIAL_SIZE, images);
}
