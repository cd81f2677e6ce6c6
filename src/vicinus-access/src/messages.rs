//! User-facing denial messages.
//!
//! On a confirmed `Denied`, the console renders a static "you don't have
//! permission" line per resource and action. This is the only user-visible
//! text this core produces; it is never an error dialog.

use serde::{Deserialize, Serialize};

use crate::resource::{Action, Resource};

/// Message catalog locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Denial message for a resource/action pair.
///
/// Unknown resources get a generic message; they deny like everything
/// else without a matrix entry, and the UI still needs something to show.
pub fn denial_message(resource: &str, action: Action, locale: Locale) -> String {
    let Some(resource) = Resource::parse(resource) else {
        return match locale {
            Locale::En => "You don't have permission to perform this action.".to_string(),
            Locale::Es => "No tienes permiso para realizar esta acción.".to_string(),
        };
    };

    match locale {
        Locale::En => {
            let noun = noun_en(resource);
            match action {
                Action::List => format!("You don't have permission to view {noun}."),
                Action::Show => {
                    format!("You don't have permission to view {}.", singular_en(resource))
                }
                Action::Create => format!("You don't have permission to create {noun}."),
                Action::Edit => format!("You don't have permission to edit {noun}."),
                Action::Delete => format!("You don't have permission to delete {noun}."),
            }
        }
        Locale::Es => {
            let noun = noun_es(resource);
            match action {
                Action::List => format!("No tienes permiso para ver {noun}."),
                Action::Show => {
                    format!("No tienes permiso para ver {}.", singular_es(resource))
                }
                Action::Create => format!("No tienes permiso para crear {noun}."),
                Action::Edit => format!("No tienes permiso para editar {noun}."),
                Action::Delete => format!("No tienes permiso para eliminar {noun}."),
            }
        }
    }
}

fn noun_en(resource: Resource) -> &'static str {
    match resource {
        Resource::Accounts => "accounts",
        Resource::Users => "users",
        Resource::Properties => "properties",
        Resource::Residents => "residents",
        Resource::Visitors => "visitors",
        Resource::RecurrentVisitors => "recurrent visitors",
        Resource::Fees => "fees",
    }
}

fn singular_en(resource: Resource) -> &'static str {
    match resource {
        Resource::Accounts => "this account",
        Resource::Users => "this user",
        Resource::Properties => "this property",
        Resource::Residents => "this resident",
        Resource::Visitors => "this visitor",
        Resource::RecurrentVisitors => "this recurrent visitor",
        Resource::Fees => "this fee",
    }
}

fn noun_es(resource: Resource) -> &'static str {
    match resource {
        Resource::Accounts => "cuentas",
        Resource::Users => "usuarios",
        Resource::Properties => "propiedades",
        Resource::Residents => "residentes",
        Resource::Visitors => "visitantes",
        Resource::RecurrentVisitors => "visitantes recurrentes",
        Resource::Fees => "cuotas",
    }
}

fn singular_es(resource: Resource) -> &'static str {
    match resource {
        Resource::Accounts => "esta cuenta",
        Resource::Users => "este usuario",
        Resource::Properties => "esta propiedad",
        Resource::Residents => "este residente",
        Resource::Visitors => "este visitante",
        Resource::RecurrentVisitors => "este visitante recurrente",
        Resource::Fees => "esta cuota",
    }
}
