use anyhow::Result;
use serde::Serialize;
use url::Url;

use crate::args::Cli;
use crate::output;
use crate::solana::client::Session;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub async fn run(cli: &Cli) -> Result<()> {
    let mut checks = Vec::new();

    // Solana tooling is optional but handy for keypairs and airdrops.
    checks.push(Check {
        name: "solana".to_string(),
        ok: which_ok("solana"),
        detail: "optional (keypair management, airdrops)".to_string(),
    });

    let session = match Session::open(cli) {
        Ok(s) => s,
        Err(e) => {
            checks.push(Check { name: "config".to_string(), ok: false, detail: e.to_string() });
            output::print(&DoctorOut { ok: false, checks })?;
            return Ok(());
        }
    };
    checks.push(Check {
        name: "config".to_string(),
        ok: true,
        detail: format!("program {} via {}", session.config.program_id, session.config.rpc_url),
    });

    let url_ok = Url::parse(&session.config.rpc_url).map(|u| matches!(u.scheme(), "http" | "https"));
    checks.push(Check {
        name: "rpc_url".to_string(),
        ok: matches!(url_ok, Ok(true)),
        detail: match url_ok {
            Ok(true) => "http(s) endpoint".to_string(),
            Ok(false) => "expected an http or https url".to_string(),
            Err(e) => e.to_string(),
        },
    });

    checks.push(match session.payer() {
        Ok(_) => Check { name: "keypair".to_string(), ok: true, detail: "loaded".to_string() },
        Err(e) => Check { name: "keypair".to_string(), ok: false, detail: e.to_string() },
    });

    if let Some(rpc) = session.client.rpc.as_ref() {
        checks.push(match rpc.get_version() {
            Ok(v) => Check { name: "rpc".to_string(), ok: true, detail: format!("solana-core {}", v.solana_core) },
            Err(e) => Check { name: "rpc".to_string(), ok: false, detail: e.to_string() },
        });

        checks.push(match rpc.get_account(&session.client.program_id) {
            Ok(acc) if acc.executable => {
                Check { name: "program".to_string(), ok: true, detail: "deployed".to_string() }
            }
            Ok(_) => Check { name: "program".to_string(), ok: false, detail: "account is not executable".to_string() },
            Err(e) => Check { name: "program".to_string(), ok: false, detail: e.to_string() },
        });
    }

    let ok = checks.iter().all(|c| c.ok || c.name == "solana");
    output::print(&DoctorOut { ok, checks })?;
    Ok(())
}

fn which_ok(cmd: &str) -> bool {
    std::env::var_os("PATH").and_then(|paths| {
        for p in std::env::split_paths(&paths) {
            let full = p.join(cmd);
            if full.exists() {
                return Some(());
            }
            #[cfg(windows)]
            {
                let full_exe = p.join(format!("{cmd}.exe"));
                if full_exe.exists() {
                    return Some(());
                }
            }
        }
        None
    }).is_some()
}
