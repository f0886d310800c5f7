//! AWVS CLI - Command-line companion for the Acunetix vulnerability scanner

use clap::{CommandFactory, Parser};

use awvs::cli::args::GlobalOptions;
use awvs::cli::{
    self, Cli, Commands, ExcludedHoursCommands, ExportCommands, GroupCommands, ProfileCommands,
    ReportCommands, RoleCommands, ScanCommands, TargetCommands, TemplateCommands,
    TrackerCommands, UserCommands, UserGroupCommands, VulnCommands,
};
use awvs::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warnings by default; `--debug` turns on debug output for this crate.
/// `RUST_LOG` still wins when set.
fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,awvs=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login => cli::login::run(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("awvs version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "awvs", &mut std::io::stdout());
            Ok(())
        }
        Commands::Target(cmd) => match cmd {
            TargetCommands::List { list } => cli::target::list(&opts, &list).await,
            TargetCommands::Get { target_id } => cli::target::get(&opts, &target_id).await,
            TargetCommands::Add {
                address,
                description,
                criticality,
            } => cli::target::add(&opts, &address, &description, criticality).await,
            TargetCommands::Update {
                target_id,
                description,
                criticality,
            } => cli::target::update(&opts, &target_id, description, criticality).await,
            TargetCommands::Delete { target_id, yes } => {
                cli::target::delete(&opts, &target_id, yes).await
            }
        },
        Commands::Group(cmd) => match cmd {
            GroupCommands::List { list } => cli::group::list(&opts, &list).await,
            GroupCommands::Get { group_id } => cli::group::get(&opts, &group_id).await,
            GroupCommands::Create { name, description } => {
                cli::group::create(&opts, &name, description).await
            }
            GroupCommands::Update {
                group_id,
                name,
                description,
            } => cli::group::update(&opts, &group_id, name, description).await,
            GroupCommands::Delete { group_id, yes } => {
                cli::group::delete(&opts, &group_id, yes).await
            }
        },
        Commands::Scan(cmd) => match cmd {
            ScanCommands::List { list } => cli::scan::list(&opts, &list).await,
            ScanCommands::Get { scan_id } => cli::scan::get(&opts, &scan_id).await,
            ScanCommands::Start {
                target_id,
                profile,
                wait,
                wait_args,
            } => cli::scan::start(&opts, &target_id, &profile, wait, &wait_args).await,
            ScanCommands::Wait { scan_id, wait_args } => {
                cli::scan::wait(&opts, &scan_id, &wait_args).await
            }
            ScanCommands::Runs { scan_id, list } => cli::scan::runs(&opts, &scan_id, &list).await,
            ScanCommands::Results {
                scan_id,
                result,
                list,
            } => cli::scan::results(&opts, &scan_id, result.as_deref(), &list).await,
            ScanCommands::Abort { scan_id } => cli::scan::abort(&opts, &scan_id).await,
            ScanCommands::Delete { scan_id, yes } => cli::scan::delete(&opts, &scan_id, yes).await,
            ScanCommands::Run {
                address,
                description,
                profile,
                cleanup,
                wait_args,
            } => {
                cli::scan::run(&opts, &address, &description, &profile, cleanup, &wait_args).await
            }
        },
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List { list } => cli::profile::list(&opts, &list).await,
            ProfileCommands::Get { profile_id } => cli::profile::get(&opts, &profile_id).await,
        },
        Commands::Template(cmd) => match cmd {
            TemplateCommands::List { list } => cli::template::list(&opts, &list).await,
            TemplateCommands::Get { template_id } => {
                cli::template::get(&opts, &template_id).await
            }
        },
        Commands::Report(cmd) => match cmd {
            ReportCommands::List { list } => cli::report::list(&opts, &list).await,
            ReportCommands::Get { report_id } => cli::report::get(&opts, &report_id).await,
            ReportCommands::Generate {
                template_id,
                source,
                ids,
                wait,
                wait_args,
            } => cli::report::generate(&opts, &template_id, source, ids, wait, &wait_args).await,
            ReportCommands::Wait {
                report_id,
                wait_args,
            } => cli::report::wait(&opts, &report_id, &wait_args).await,
            ReportCommands::Delete { report_id, yes } => {
                cli::report::delete(&opts, &report_id, yes).await
            }
        },
        Commands::Export(cmd) => match cmd {
            ExportCommands::Types { list } => cli::export::types(&opts, &list).await,
            ExportCommands::Create {
                export_type_id,
                source,
                ids,
                waf_id,
                wait,
                wait_args,
            } => {
                cli::export::create(
                    &opts,
                    &export_type_id,
                    source,
                    ids,
                    waf_id,
                    wait,
                    &wait_args,
                )
                .await
            }
            ExportCommands::Get { export_id } => cli::export::get(&opts, &export_id).await,
            ExportCommands::Wait {
                export_id,
                wait_args,
            } => cli::export::wait(&opts, &export_id, &wait_args).await,
            ExportCommands::Delete { export_id, yes } => {
                cli::export::delete(&opts, &export_id, yes).await
            }
        },
        Commands::Vuln(cmd) => match cmd {
            VulnCommands::List { list } => cli::vuln::list(&opts, &list).await,
            VulnCommands::Get { vuln_id } => cli::vuln::get(&opts, &vuln_id).await,
            VulnCommands::SetStatus {
                vuln_ids,
                status,
                comment,
            } => cli::vuln::set_status(&opts, &vuln_ids, status, comment).await,
        },
        Commands::User(cmd) => match cmd {
            UserCommands::List { list } => cli::user::list(&opts, &list).await,
            UserCommands::Get { user_id } => cli::user::get(&opts, &user_id).await,
            UserCommands::Create(args) => cli::user::create(&opts, &args).await,
            UserCommands::Update(args) => cli::user::update(&opts, &args).await,
            UserCommands::Delete { user_id, yes } => cli::user::delete(&opts, &user_id, yes).await,
        },
        Commands::Role(cmd) => match cmd {
            RoleCommands::List { list } => cli::role::list(&opts, &list).await,
            RoleCommands::Get { role_id } => cli::role::get(&opts, &role_id).await,
            RoleCommands::Create {
                name,
                description,
                permissions,
            } => cli::role::create(&opts, &name, description, permissions).await,
            RoleCommands::Update {
                role_id,
                name,
                description,
                permissions,
            } => cli::role::update(&opts, &role_id, name, description, permissions).await,
            RoleCommands::Delete { role_id, yes } => cli::role::delete(&opts, &role_id, yes).await,
            RoleCommands::Permissions { list } => cli::role::permissions(&opts, &list).await,
        },
        Commands::UserGroup(cmd) => match cmd {
            UserGroupCommands::List { list, extended } => {
                cli::user_group::list(&opts, &list, extended).await
            }
            UserGroupCommands::Get { group_id } => cli::user_group::get(&opts, &group_id).await,
            UserGroupCommands::Create(args) => cli::user_group::create(&opts, &args).await,
            UserGroupCommands::Update(args) => cli::user_group::update(&opts, &args).await,
            UserGroupCommands::Delete { group_id, yes } => {
                cli::user_group::delete(&opts, &group_id, yes).await
            }
            UserGroupCommands::AddUsers { group_id, user_ids } => {
                cli::user_group::add_users(&opts, &group_id, user_ids).await
            }
            UserGroupCommands::RemoveUsers { group_id, user_ids } => {
                cli::user_group::remove_users(&opts, &group_id, user_ids).await
            }
            UserGroupCommands::AddRoleMappings {
                group_id,
                role_mappings,
            } => cli::user_group::add_role_mappings(&opts, &group_id, &role_mappings).await,
            UserGroupCommands::RemoveRoleMappings {
                group_id,
                mapping_ids,
            } => cli::user_group::remove_role_mappings(&opts, &group_id, mapping_ids).await,
        },
        Commands::ExcludedHours(cmd) => match cmd {
            ExcludedHoursCommands::List { list } => cli::excluded_hours::list(&opts, &list).await,
            ExcludedHoursCommands::Get { profile_id } => {
                cli::excluded_hours::get(&opts, &profile_id).await
            }
            ExcludedHoursCommands::Create {
                name,
                matrix,
                time_offset,
            } => cli::excluded_hours::create(&opts, &name, &matrix, time_offset).await,
            ExcludedHoursCommands::Update {
                profile_id,
                name,
                matrix,
                time_offset,
            } => {
                cli::excluded_hours::update(&opts, &profile_id, name, matrix.as_deref(), time_offset)
                    .await
            }
            ExcludedHoursCommands::Delete { profile_id, yes } => {
                cli::excluded_hours::delete(&opts, &profile_id, yes).await
            }
        },
        Commands::Tracker(cmd) => match cmd {
            TrackerCommands::List { list } => cli::tracker::list(&opts, &list).await,
            TrackerCommands::Get { tracker_id } => cli::tracker::get(&opts, &tracker_id).await,
            TrackerCommands::Create { name, config_file } => {
                cli::tracker::create(&opts, &name, &config_file).await
            }
            TrackerCommands::Update {
                tracker_id,
                name,
                config_file,
            } => cli::tracker::update(&opts, &tracker_id, name, config_file.as_deref()).await,
            TrackerCommands::Delete { tracker_id, yes } => {
                cli::tracker::delete(&opts, &tracker_id, yes).await
            }
            TrackerCommands::Test {
                tracker_id,
                config_file,
            } => cli::tracker::test(&opts, tracker_id.as_deref(), config_file.as_deref()).await,
        },
    }
}
