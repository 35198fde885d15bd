// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create a file appender that never rolls over, for the log file at `path_str`. The
/// file is created (or opened for appending) right away.
///
/// Note that wrapping the appender in `tracing_appender::non_blocking` loses output
/// when the process ends without flushing, which is how an interactive shell usually
/// ends.
///
/// # Errors
///
/// Returns an error if:
/// - `path_str` has no parent directory or no file name.
/// - The file (or a missing parent folder) can not be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => {
            return Err(miette::miette!(
                code = "r3bl_qcli::log::no_parent_dir",
                "Can't access the folder of {}. It might not exist, or the required permissions are missing.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            code = "r3bl_qcli::log::no_file_name",
            "Can't access file name {}. It might not exist, or the required permissions are missing.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
