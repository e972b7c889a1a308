use std::{env, fs, path::PathBuf};

use clap::{Arg, ArgAction, Command};

fn id_arg(name: &'static str) -> Arg {
    Arg::new(name).required(true)
}

fn build_cli() -> Command {
    let filters = [
        Arg::new("query").short('q').long("query").value_name("QUERY"),
        Arg::new("industry").long("industry").value_name("INDUSTRY"),
        Arg::new("stage").long("stage").value_name("STAGE"),
    ];

    Command::new("scout")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Scout Contributors")
        .about("Startup research from the terminal")
        .arg(
            clap::arg!(--"data-dir" <DIR> "Directory for notes, lists, searches and cached enrichments")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand_required(true)
        .subcommand(
            Command::new("companies")
                .about("Browse the directory and manage custom companies")
                .subcommand(
                    Command::new("list")
                        .args(filters.clone())
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["name", "industry", "stage", "location"]),
                        )
                        .arg(Arg::new("desc").long("desc").action(ArgAction::SetTrue))
                        .arg(Arg::new("page").long("page").value_name("N")),
                )
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("url").long("url").required(true))
                        .arg(Arg::new("industry").long("industry"))
                        .arg(Arg::new("stage").long("stage"))
                        .arg(Arg::new("location").long("location")),
                )
                .subcommand(Command::new("show").arg(id_arg("id"))),
        )
        .subcommand(
            Command::new("enrich")
                .about("Summarize a company's website with the LLM and cache the result")
                .arg(id_arg("id"))
                .arg(Arg::new("server").long("server").value_name("URL"))
                .arg(Arg::new("timeout").long("timeout").value_name("SECS").conflicts_with("server")),
        )
        .subcommand(
            Command::new("note")
                .about("Read or write the note attached to a company")
                .subcommand(Command::new("show").arg(id_arg("id")))
                .subcommand(Command::new("set").arg(id_arg("id")).arg(id_arg("text")))
                .subcommand(Command::new("delete").arg(id_arg("id"))),
        )
        .subcommand(
            Command::new("lists")
                .about("Curate and export company lists")
                .subcommand(Command::new("list"))
                .subcommand(Command::new("show").arg(id_arg("id")))
                .subcommand(
                    Command::new("create")
                        .arg(id_arg("name"))
                        .arg(Arg::new("company").long("company").value_name("COMPANY_ID")),
                )
                .subcommand(Command::new("add").arg(id_arg("list_id")).arg(id_arg("company_id")))
                .subcommand(Command::new("remove").arg(id_arg("list_id")).arg(id_arg("company_id")))
                .subcommand(Command::new("delete").arg(id_arg("id")))
                .subcommand(
                    Command::new("export")
                        .arg(id_arg("id"))
                        .arg(
                            Arg::new("format")
                                .short('f')
                                .long("format")
                                .value_parser(["csv", "json"]),
                        )
                        .arg(
                            Arg::new("output")
                                .short('o')
                                .long("output")
                                .value_name("FILE")
                                .value_parser(clap::value_parser!(std::path::PathBuf)),
                        ),
                ),
        )
        .subcommand(
            Command::new("searches")
                .about("Save and re-run directory searches")
                .subcommand(Command::new("list"))
                .subcommand(Command::new("save").args(filters))
                .subcommand(Command::new("delete").arg(id_arg("id")))
                .subcommand(Command::new("run").arg(id_arg("id"))),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or change the colour theme preference")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("set").arg(Arg::new("theme").required(true).value_parser(["dark", "light"])))
                .subcommand(Command::new("toggle")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = build_cli();

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "scout", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "scout", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "scout", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "scout", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
