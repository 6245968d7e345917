use std::io;

use super::super::{exit_status::ExitStatus, report::print_languages_to};
use crate::core::SUPPORTED_LANGUAGES;

pub fn languages() -> ExitStatus {
    print_languages_to(SUPPORTED_LANGUAGES, &mut io::stdout().lock());
    ExitStatus::Success
}
