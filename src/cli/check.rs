use serde_json::json;

use crate::services::role_policy::{evaluate, AssignmentRequest, Decision};
use crate::types::internal::context::RequestContext;

use super::CheckArgs;

/// Evaluate a role assignment and print the decision
///
/// Exit status stays 0 either way; a denial is a result, not a failure.
pub fn run_check(args: &CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::for_cli("check");
    tracing::debug!("Evaluating role assignment ({})", ctx.actor_id);

    let request = AssignmentRequest {
        acting_role: &args.acting,
        target_role: &args.target,
        operation: args.operation.into(),
        target_current_role: args.current.as_deref(),
    };

    let decision = evaluate(&request);

    if args.json {
        let body = match decision {
            Decision::Allowed => json!({ "allowed": true }),
            Decision::Denied(reason) => json!({ "allowed": false, "reason": reason.as_str() }),
        };
        println!("{}", body);
    } else {
        match decision {
            Decision::Allowed => println!("allowed"),
            Decision::Denied(reason) => println!("denied: {}", reason),
        }
    }

    Ok(())
}
