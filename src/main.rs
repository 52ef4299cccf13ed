use clap::{arg,crate_version,Command};
use lzstring_rs::{compress_with,decompress_with,Format};

const RCH: &str = "unreachable was reached";

fn parse_format(s: &str) -> Format {
    match s {
        "bytes" => Format::Bytes,
        "base64" => Format::Base64,
        "url" => Format::UrlComponent,
        _ => unreachable!("{}",RCH)
    }
}

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::init();

    let long_help =
"Examples:
---------
Compress:      `lzstring compress -f base64 -i my_expanded -o my_compressed`
Expand:        `lzstring expand -f base64 -i my_compressed -o my_expanded`";

    let formats = ["bytes","base64","url"];

    let mut main_cmd = Command::new("lzstring")
        .about("Compress and expand with the LZString wire format")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-f --format <FORMAT> "container format").value_parser(formats)
            .default_value("bytes"))
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("compress a file"));

        main_cmd = main_cmd.subcommand(Command::new("expand")
        .arg(arg!(-f --format <FORMAT> "container format").value_parser(formats)
            .default_value("bytes"))
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("expand a file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let format = parse_format(cmd.get_one::<String>("format").expect(RCH));
        let dat = std::fs::read(path_in)?;
        let compressed = compress_with(&dat,format)?;
        std::fs::write(path_out,compressed)?;
    }

    if let Some(cmd) = matches.subcommand_matches("expand") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let format = parse_format(cmd.get_one::<String>("format").expect(RCH));
        let dat = std::fs::read(path_in)?;
        let expanded = decompress_with(&dat,format)?;
        std::fs::write(path_out,expanded)?;
    }

    Ok(())
}
