// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use cloudcap_core::cdd::{
    SelectCapability, SelectCapabilityOption, VendorCapability, VendorCapabilityType, localized,
};
use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};

use super::Context;
use crate::parser::OptionGroup;

/// A PickOne group with no dedicated translator, as a select capability.
///
/// Options keep their declaration order; the option name is the value sent
/// back when the user picks it. A group whose default did not resolve offers
/// its first option as the default.
pub(super) fn translate(
    group: &OptionGroup,
    ctx: &Context<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<VendorCapability> {
    if group.options.is_empty() {
        diagnostics.push(
            Diagnostic::structural("group declares no options")
                .at_line(group.line)
                .for_key(&group.key),
        );
        return None;
    }

    let first_is_default = group.default_option().is_none();
    let options = group
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| SelectCapabilityOption {
            value: option.name.clone(),
            display_name: String::new(),
            is_default: option.default || (first_is_default && index == 0),
            display_name_localized: localized(ctx.locale, option.label()),
        })
        .collect();

    Some(VendorCapability {
        id: group.key.clone(),
        capability_type: VendorCapabilityType::Select,
        display_name: String::new(),
        display_name_localized: localized(ctx.locale, group.label()),
        select_cap: Some(SelectCapability { option: options }),
    })
}
