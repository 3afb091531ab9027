use serde_json::json;

use crate::services::role_policy::available_roles_for;

use super::RolesArgs;

/// List the roles the acting role may assign via the given operation
pub fn run_roles(args: &RolesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let roles = available_roles_for(&args.acting, args.operation.into());

    if args.json {
        let body: Vec<_> = roles
            .iter()
            .map(|role| json!({ "code": role.code(), "label": role.label() }))
            .collect();
        println!("{}", serde_json::Value::Array(body));
    } else if roles.is_empty() {
        println!("no assignable roles");
    } else {
        for role in roles {
            println!("{}\t{}", role.code(), role.label());
        }
    }

    Ok(())
}
