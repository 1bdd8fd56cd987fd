//! Shared harness for end-to-end tests: builds the full application over a
//! temporary credential file and carries the session cookie between requests.

use std::path::PathBuf;
use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{test, web};
use argon2::Params;
use backend::domain::AccountService;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::argon2_hasher::Argon2Hasher;
use backend::outbound::credential_file::JsonCredentialFile;
use backend::server::AppDependencies;
use camino::Utf8PathBuf;
use sales_data::SalesDataset;
use tempfile::TempDir;

pub const SALES_CSV: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24
3,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82
4,Mystery,PS2,N/A,Action,N/A,,,,,
";

/// Temporary directory holding `users.json` for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn users_file(&self) -> PathBuf {
        self.dir.path().join("users.json")
    }

    /// Parsed contents of the credential file.
    pub fn users_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.users_file()).expect("users file exists");
        serde_json::from_str(&raw).expect("users file is valid JSON")
    }

    /// Application dependencies wired exactly as `main` wires them, with a
    /// cheap hasher cost.
    pub fn deps(&self) -> AppDependencies {
        let path = Utf8PathBuf::try_from(self.users_file()).expect("utf-8 temp path");
        let store = JsonCredentialFile::new(path).expect("credential path");
        let params = Params::new(
            Params::MIN_M_COST,
            Params::MIN_T_COST,
            Params::MIN_P_COST,
            None,
        )
        .expect("valid params");
        let gate = AccountService::new(
            Arc::new(store),
            Arc::new(Argon2Hasher::with_params(params)),
        );
        let dataset = SalesDataset::from_reader(SALES_CSV.as_bytes()).expect("fixture csv");
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::new(Arc::new(gate), Arc::new(dataset))),
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }
}

/// Cookie jar holding the latest `session` cookie.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    /// Send `req` with the current cookie and remember any cookie set.
    pub async fn send<S, B>(&mut self, app: &S, req: test::TestRequest) -> ServiceResponse<B>
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let req = match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        };
        let res = test::call_service(app, req.to_request()).await;
        if let Some(cookie) = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
        {
            self.cookie = Some(cookie.into_owned());
        }
        res
    }

    pub async fn get<S, B>(&mut self, app: &S, uri: &str) -> ServiceResponse<B>
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        self.send(app, test::TestRequest::get().uri(uri)).await
    }

    pub async fn post_form<S, B>(
        &mut self,
        app: &S,
        uri: &str,
        form: &[(&str, &str)],
    ) -> ServiceResponse<B>
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        self.send(app, test::TestRequest::post().uri(uri).set_form(form))
            .await
    }

    /// GET `uri` and return the body as text.
    pub async fn page<S, B>(&mut self, app: &S, uri: &str) -> String
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let res = self.get(app, uri).await;
        let bytes = test::read_body(res).await;
        String::from_utf8(bytes.to_vec()).expect("utf-8 page")
    }
}

/// The `Location` header of a redirect.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<&str> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
