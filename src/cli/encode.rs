use anyhow::Result;
use std::collections::HashSet;
use tracing::warn;

use crate::{encode_input, encode_stats, split_input, Format};

use super::print_encode_stats;
use super::{read_input, EncodeArgs};

/// Largest payload a single DHCP option can carry.
const MAX_OPTION_LEN: usize = 255;

pub(crate) fn run_encode(args: EncodeArgs) -> Result<()> {
    let raw = read_input(&args.names, args.r#in.as_deref())?;
    let elements = encode_input(&raw)?;

    if elements.len() > MAX_OPTION_LEN {
        warn!(
            "Encoded list is {} bytes; a single DHCP option holds at most {} bytes",
            elements.len(),
            MAX_OPTION_LEN
        );
    }

    let mut seen = HashSet::new();
    let mut formats = args.formats.clone();
    formats.retain(|format| seen.insert(*format));
    match formats.as_slice() {
        [] => {
            for format in Format::ALL {
                println!("{}: {}", format, format.render(&elements, &args.separator));
            }
        }
        [format] => println!("{}", format.render(&elements, &args.separator)),
        many => {
            for format in many {
                println!("{}: {}", format, format.render(&elements, &args.separator));
            }
        }
    }

    if args.stats {
        print_encode_stats(&encode_stats(&split_input(&raw), &elements));
    }

    Ok(())
}
