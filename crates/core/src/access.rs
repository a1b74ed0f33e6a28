//! Role-based access decisions for organisation-scoped data.
//!
//! [`authorize`] is a state-free decision table evaluated once per request.
//! It is the only place in the system that decides who may touch what; the
//! HTTP layer merely translates [`Denial`] values into 401/403 responses.
//!
//! Evaluation order matters: the role gate runs first (consultant-exclusive
//! operations fail fast for clients), the ownership gate second (for client
//! operations that are role-permitted but scoped to the owning organisation).

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Actor roles. Exactly two exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Cross-tenant visibility and corrective-action rights.
    Consultant,
    /// Restricted to the single owning organisation.
    Client,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Consultant => "consultant",
            Role::Client => "client",
        }
    }

    /// Parse the canonical role name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "consultant" => Some(Role::Consultant),
            "client" => Some(Role::Client),
            _ => None,
        }
    }
}

/// The per-request actor triple, reconstructed from the session token.
///
/// Invariant: consultants carry no organisation reference; clients always
/// carry exactly one. The decision logic does not assume the invariant holds
/// — a client with a missing organisation id simply owns nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    pub user_id: DbId,
    pub role: Role,
    pub organisation_id: Option<DbId>,
}

/// Every gated operation, tagged with its target organisation where scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Portfolio-wide organisation listing. Consultant-only.
    ListOrganisations,
    /// Cross-tenant audit trail. Consultant-only.
    ViewAuditLog,
    /// Re-run the scoring engine on stored answers. Consultant-only.
    RecalculateRiskScore { organisation_id: DbId },
    /// Create an improvement action by hand. Consultant-only.
    CreateManualAction { organisation_id: DbId },
    /// Read a single organisation's detail.
    ViewOrganisation { organisation_id: DbId },
    /// Read an organisation's latest risk score.
    ViewRiskScore { organisation_id: DbId },
    /// Submit a questionnaire for scoring.
    SubmitQuickscan { organisation_id: DbId },
    /// List an organisation's improvement actions.
    ListActions { organisation_id: DbId },
    /// Move an improvement action between statuses.
    UpdateActionStatus { organisation_id: DbId },
    /// List an organisation's incidents.
    ListIncidents { organisation_id: DbId },
    /// Log a new incident.
    ReportIncident { organisation_id: DbId },
    /// List an organisation's suppliers.
    ListSuppliers { organisation_id: DbId },
    /// Register a supplier.
    RegisterSupplier { organisation_id: DbId },
}

impl Operation {
    /// Operations only a consultant may ever perform, regardless of
    /// ownership. These represent cross-tenant visibility or
    /// consultant-privileged corrective actions.
    fn consultant_only(self) -> bool {
        matches!(
            self,
            Operation::ListOrganisations
                | Operation::ViewAuditLog
                | Operation::RecalculateRiskScore { .. }
                | Operation::CreateManualAction { .. }
        )
    }

    /// The owning organisation for organisation-scoped operations.
    fn target_organisation(self) -> Option<DbId> {
        match self {
            Operation::ListOrganisations | Operation::ViewAuditLog => None,
            Operation::RecalculateRiskScore { organisation_id }
            | Operation::CreateManualAction { organisation_id }
            | Operation::ViewOrganisation { organisation_id }
            | Operation::ViewRiskScore { organisation_id }
            | Operation::SubmitQuickscan { organisation_id }
            | Operation::ListActions { organisation_id }
            | Operation::UpdateActionStatus { organisation_id }
            | Operation::ListIncidents { organisation_id }
            | Operation::ReportIncident { organisation_id }
            | Operation::ListSuppliers { organisation_id }
            | Operation::RegisterSupplier { organisation_id } => Some(organisation_id),
        }
    }
}

/// Why a request was denied.
///
/// `Unauthenticated` (no valid actor, HTTP 401) is recoverable by logging in
/// again; `Forbidden` (policy violation, HTTP 403) is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    Forbidden,
}

/// Decide whether `actor` may perform `operation`.
///
/// Pure and synchronous; any number of concurrent calls may run without
/// coordination.
pub fn authorize(actor: Option<&ActorContext>, operation: Operation) -> Result<(), Denial> {
    let Some(actor) = actor else {
        return Err(Denial::Unauthenticated);
    };

    // Role gate.
    match actor.role {
        Role::Consultant => return Ok(()),
        Role::Client if operation.consultant_only() => return Err(Denial::Forbidden),
        Role::Client => {}
    }

    // Ownership gate. Operations without a target organisation were all
    // consultant-only and handled above.
    let Some(target) = operation.target_organisation() else {
        return Err(Denial::Forbidden);
    };
    if actor.organisation_id == Some(target) {
        Ok(())
    } else {
        Err(Denial::Forbidden)
    }
}

/// Tagged query scope for listings that span organisations.
///
/// Shared by the access decision and query construction so both sides use
/// one exhaustively-checked representation instead of a loosely-typed
/// filter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgScope {
    AllOrganisations,
    SingleOrganisation(DbId),
}

/// The listing scope an actor is entitled to.
///
/// Consultants see the whole portfolio; clients see exactly their own
/// organisation. A client without an organisation reference (an invariant
/// violation upstream) is entitled to nothing and is denied.
pub fn list_scope(actor: &ActorContext) -> Result<OrgScope, Denial> {
    match actor.role {
        Role::Consultant => Ok(OrgScope::AllOrganisations),
        Role::Client => actor
            .organisation_id
            .map(OrgScope::SingleOrganisation)
            .ok_or(Denial::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultant() -> ActorContext {
        ActorContext {
            user_id: 1,
            role: Role::Consultant,
            organisation_id: None,
        }
    }

    fn client(org: DbId) -> ActorContext {
        ActorContext {
            user_id: 2,
            role: Role::Client,
            organisation_id: Some(org),
        }
    }

    /// Every operation, parameterised on a target organisation.
    fn all_operations(org: DbId) -> Vec<Operation> {
        vec![
            Operation::ListOrganisations,
            Operation::ViewAuditLog,
            Operation::RecalculateRiskScore {
                organisation_id: org,
            },
            Operation::CreateManualAction {
                organisation_id: org,
            },
            Operation::ViewOrganisation {
                organisation_id: org,
            },
            Operation::ViewRiskScore {
                organisation_id: org,
            },
            Operation::SubmitQuickscan {
                organisation_id: org,
            },
            Operation::ListActions {
                organisation_id: org,
            },
            Operation::UpdateActionStatus {
                organisation_id: org,
            },
            Operation::ListIncidents {
                organisation_id: org,
            },
            Operation::ReportIncident {
                organisation_id: org,
            },
            Operation::ListSuppliers {
                organisation_id: org,
            },
            Operation::RegisterSupplier {
                organisation_id: org,
            },
        ]
    }

    // -----------------------------------------------------------------------
    // No actor context
    // -----------------------------------------------------------------------

    #[test]
    fn missing_actor_is_unauthenticated_everywhere() {
        for op in all_operations(7) {
            assert_eq!(authorize(None, op), Err(Denial::Unauthenticated), "{op:?}");
        }
    }

    // -----------------------------------------------------------------------
    // Consultant role supremacy
    // -----------------------------------------------------------------------

    #[test]
    fn consultant_is_allowed_every_operation_on_every_org() {
        let actor = consultant();
        for org in [1, 2, 999] {
            for op in all_operations(org) {
                assert_eq!(authorize(Some(&actor), op), Ok(()), "{op:?}");
            }
        }
    }

    #[test]
    fn consultant_portfolio_listing_is_allowed_with_null_org() {
        let actor = consultant();
        assert!(actor.organisation_id.is_none());
        assert_eq!(
            authorize(Some(&actor), Operation::ListOrganisations),
            Ok(())
        );
    }

    // -----------------------------------------------------------------------
    // Client ownership symmetry
    // -----------------------------------------------------------------------

    #[test]
    fn client_ownership_predicate_governs_scoped_operations() {
        for (own, target) in [(1, 1), (1, 2), (2, 1), (42, 42)] {
            let actor = client(own);
            let ops = [
                Operation::ViewOrganisation {
                    organisation_id: target,
                },
                Operation::ViewRiskScore {
                    organisation_id: target,
                },
                Operation::SubmitQuickscan {
                    organisation_id: target,
                },
                Operation::ListActions {
                    organisation_id: target,
                },
                Operation::UpdateActionStatus {
                    organisation_id: target,
                },
                Operation::ListIncidents {
                    organisation_id: target,
                },
                Operation::ReportIncident {
                    organisation_id: target,
                },
                Operation::ListSuppliers {
                    organisation_id: target,
                },
                Operation::RegisterSupplier {
                    organisation_id: target,
                },
            ];
            for op in ops {
                let expected = if own == target {
                    Ok(())
                } else {
                    Err(Denial::Forbidden)
                };
                assert_eq!(authorize(Some(&actor), op), expected, "{op:?}");
            }
        }
    }

    #[test]
    fn client_without_org_reference_owns_nothing() {
        let actor = ActorContext {
            user_id: 3,
            role: Role::Client,
            organisation_id: None,
        };
        assert_eq!(
            authorize(
                Some(&actor),
                Operation::ViewOrganisation { organisation_id: 1 }
            ),
            Err(Denial::Forbidden)
        );
    }

    #[test]
    fn client_denied_other_org_detail() {
        let actor = client(1);
        assert_eq!(
            authorize(
                Some(&actor),
                Operation::ViewOrganisation { organisation_id: 2 }
            ),
            Err(Denial::Forbidden)
        );
    }

    // -----------------------------------------------------------------------
    // Consultant-exclusive operations are role-gated before ownership
    // -----------------------------------------------------------------------

    #[test]
    fn client_denied_consultant_only_operations_even_for_own_org() {
        let actor = client(5);
        let ops = [
            Operation::ListOrganisations,
            Operation::ViewAuditLog,
            Operation::RecalculateRiskScore { organisation_id: 5 },
            Operation::CreateManualAction { organisation_id: 5 },
        ];
        for op in ops {
            assert_eq!(authorize(Some(&actor), op), Err(Denial::Forbidden), "{op:?}");
        }
    }

    // -----------------------------------------------------------------------
    // Listing scope
    // -----------------------------------------------------------------------

    #[test]
    fn consultant_scope_spans_all_organisations() {
        assert_eq!(list_scope(&consultant()), Ok(OrgScope::AllOrganisations));
    }

    #[test]
    fn client_scope_is_their_own_organisation() {
        assert_eq!(
            list_scope(&client(9)),
            Ok(OrgScope::SingleOrganisation(9))
        );
    }

    #[test]
    fn client_without_org_has_no_scope() {
        let actor = ActorContext {
            user_id: 4,
            role: Role::Client,
            organisation_id: None,
        };
        assert_eq!(list_scope(&actor), Err(Denial::Forbidden));
    }

    // -----------------------------------------------------------------------
    // Role parsing
    // -----------------------------------------------------------------------

    #[test]
    fn role_round_trips_through_canonical_names() {
        assert_eq!(Role::parse("consultant"), Some(Role::Consultant));
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::Consultant.as_str(), "consultant");
        assert_eq!(Role::Client.as_str(), "client");
    }
}
