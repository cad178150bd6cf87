use anyhow::Result;

use crate::decode_text;

use super::{read_input, DecodeArgs};

pub(crate) fn run_decode(args: DecodeArgs) -> Result<()> {
    let text = read_input(args.text.as_slice(), args.r#in.as_deref())?;
    let names = decode_text(&text, args.format)?;
    println!("{}", names.join(" "));
    Ok(())
}
