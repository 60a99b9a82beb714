mod official;

pub mod prelude {
    pub use cb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            cb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self { db_connections }
        }

        pub fn create_user(&self, email: &str, role: Role) -> UserId {
            let id = {
                let db = self.db_connections.exclusive().unwrap();
                usecases::create_new_user(
                    &db,
                    usecases::NewUser {
                        email: email.into(),
                        password: "secret99".into(),
                    },
                )
                .unwrap()
            };
            if role != Role::User {
                let email = email.parse().unwrap();
                flows::set_user_role(&self.db_connections, &email, role).unwrap();
            }
            id
        }

        pub fn create_org_with_images(&self, admin: UserId, name: &str) -> Id {
            flows::create_organization(
                &self.db_connections,
                admin,
                usecases::NewOrganization {
                    name: name.into(),
                    description: "".into(),
                    thumbnail_url: Some("https://img.campus.edu/t.png".into()),
                    banner_url: Some("https://img.campus.edu/b.png".into()),
                    visibility: OrgVisibility::Public,
                },
            )
            .unwrap()
        }

        pub fn is_official(&self, org_id: &Id) -> bool {
            let db = self.db_connections.shared().unwrap();
            usecases::check_official(&db, Some(org_id.clone()), None).unwrap()
        }

        pub fn is_pending(&self, org_id: &Id) -> bool {
            let db = self.db_connections.shared().unwrap();
            usecases::check_official_pending(&db, Some(org_id.clone()), None).unwrap()
        }
    }
}
