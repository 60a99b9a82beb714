use super::*;
use cb_boundary as json;

#[post("/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    jwt_state: &State<jwt::JwtState>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::JwtToken> {
    let json::Credentials { email, password } = credentials?.into_inner();
    let email = email
        .parse::<EmailAddress>()
        .map_err(|_| usecases::Error::Credentials)?;
    let user = usecases::login_with_email(
        &db.shared()?,
        &usecases::Credentials {
            email: &email,
            password: &password,
        },
    )?;
    let token = jwt_state.generate_token(user.id)?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Result<()> {
    for token in auth.bearer_tokens() {
        jwt_state.blacklist_token(token.clone());
    }
    Ok(Json(()))
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(db: sqlite::Connections, new_user: JsonResult<json::NewUser>) -> Result<()> {
    let json::NewUser { email, password } = new_user?.into_inner();
    usecases::create_new_user(&db.exclusive()?, usecases::NewUser { email, password })?;
    Ok(Json(()))
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::authorize_user_by_id(&db.shared()?, account.user_id(), Role::User)?;
    Ok(Json(user.into()))
}
