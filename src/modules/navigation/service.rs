use ministry_auth::{Session, access};
use ministry_core::{Action, Permission, Resource};
use ministry_models::NavigationItem;

/// Dashboard menu in display order.
const MENU: [(&str, &str, Resource); 12] = [
    ("Enfants", "/dashboard/enfants", Resource::Enfants),
    ("Moniteurs", "/dashboard/moniteurs", Resource::Moniteurs),
    ("Activités", "/dashboard/activites", Resource::Activites),
    ("Salles", "/dashboard/salles", Resource::Salles),
    ("Cotisations", "/dashboard/cotisations", Resource::Cotisations),
    ("Dépenses", "/dashboard/depenses", Resource::Depenses),
    ("Rapports de culte", "/dashboard/rapports", Resource::Rapports),
    ("Photos", "/dashboard/photos", Resource::Photos),
    ("Vidéos", "/dashboard/videos", Resource::Videos),
    ("Blog", "/dashboard/blog", Resource::Blog),
    ("Utilisateurs", "/dashboard/users", Resource::Users),
    ("Rôles", "/dashboard/roles", Resource::Roles),
];

pub struct NavigationService;

impl NavigationService {
    /// Menu entries whose page the session may view.
    pub fn navigation_for(session: Option<&Session>) -> Vec<NavigationItem> {
        MENU.iter()
            .filter(|(_, _, resource)| {
                access::can(session, Permission::new(*resource, Action::View))
            })
            .map(|(label, href, resource)| NavigationItem {
                label: label.to_string(),
                href: href.to_string(),
                resource: resource.as_str().to_string(),
                can_create: access::can(session, Permission::new(*resource, Action::Create)),
            })
            .collect()
    }
}
