// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use std::process::ExitCode;

fn main() -> ExitCode {
    rmcstat::cli::main()
}
