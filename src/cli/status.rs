//! Status, path and clear commands.

use color_eyre::{eyre::WrapErr, Result};

use crate::auth::{CredentialStore, RestoreOptions, RestoreOutcome};
use crate::cli_output::{
    icons, print_detail, print_footer, print_header, print_status_line, print_summary,
    print_troubleshoot,
};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::traits::NullReporter;

fn open_store(config: &StoreConfig) -> Result<CredentialStore> {
    let store = CredentialStore::new(config).wrap_err("Failed to open credential store")?;
    Ok(if config.silent {
        store.with_reporter(NullReporter)
    } else {
        store
    })
}

/// Restore the stored session and print a redacted summary.
///
/// With `strict` set, anything but a complete session is an error.
pub fn handle_status_command(config: &StoreConfig) -> Result<RestoreOutcome> {
    let mut store = open_store(config)?;

    if !config.silent {
        print_header("CREDENTIAL STATUS");
    }

    let outcome = match store.restore(RestoreOptions::from(config)) {
        Ok(outcome) => outcome,
        Err(err) => {
            if !config.silent {
                let (message, hint) = restore_failure_lines(&err);
                print_troubleshoot(&[message.as_str(), hint]);
            }
            return Err(err).wrap_err("No usable session is stored");
        }
    };

    if config.silent {
        return Ok(outcome);
    }

    println!();
    print_detail("Store", &store.path().display().to_string());
    if outcome.replaced_credentials() {
        print_summary(&store.credentials().summary());
    }
    if !store.is_complete() {
        print_troubleshoot(&[
            "No complete session is available.",
            "Log in again to capture cookies, service session ids and a master token.",
        ]);
    }
    println!();
    print_footer();

    Ok(outcome)
}

/// Troubleshooting lines shown when a strict restore fails.
fn restore_failure_lines(err: &StoreError) -> (String, &'static str) {
    (
        format!("{} ({})", err.user_message(), err.error_code()),
        err.recovery_hint(),
    )
}

/// Print the resolved store path.
pub fn handle_path_command(config: &StoreConfig) -> Result<()> {
    let store = open_store(config)?;
    println!("{}", store.path().display());
    Ok(())
}

/// Delete the stored credentials file.
pub fn handle_clear_command(config: &StoreConfig) -> Result<()> {
    let mut store = open_store(config)?;
    let removed = store.clear().wrap_err("Failed to clear stored credentials")?;

    if !config.silent {
        if removed {
            print_status_line(
                icons::SUCCESS,
                &format!("Removed {}", store.path().display()),
            );
        } else {
            print_status_line(icons::WARNING, "No stored credentials to remove");
        }
    }
    Ok(())
}
