// # namecheapctl - Namecheap registrar client
//
// This is a THIN integration layer only: record synthesis, encoding and
// response handling all live in namecheap-core.
//
// The binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Running exactly one action and printing its result as JSON
//
// ## Actions
//
// - `plan <domain> <ipv4>`: Print the DNS record plan, no network access
// - `set-dns <domain> <ipv4>`: Replace the domain's host records
// - `create-domain <request.json>`: Register a domain
//
// ## Configuration
//
// ### Credentials (set-dns, create-domain)
// - `NAMECHEAP_API_USER`: API user, also sent as UserName
// - `NAMECHEAP_API_KEY`: API key
// - `NAMECHEAP_CLIENT_IP`: Whitelisted client IP
// - `NAMECHEAP_SERVICE`: `production` for the live API, anything else for sandbox
// - `NAMECHEAP_MODE`: `dry-run` to log instead of sending
//
// ### DNS plan (plan, set-dns)
// - `NAMECHEAP_IPV6`, `NAMECHEAP_HOSTNAME`, `NAMECHEAP_ACME_CHALLENGE`
// - `NAMECHEAP_INCLUDE_NS` (default false), `NAMECHEAP_INCLUDE_DMARC`
//   (default true), `NAMECHEAP_ONLY_ACME` (default false)
//
// ### Logging
// - `NAMECHEAP_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//
// ## Example
//
// ```bash
// export NAMECHEAP_API_USER=alice
// export NAMECHEAP_API_KEY=your_key
// export NAMECHEAP_CLIENT_IP=203.0.113.7
// export NAMECHEAP_SERVICE=sandbox
// export NAMECHEAP_HOSTNAME=mail.example.com
//
// namecheapctl set-dns example.com 203.0.113.10
// ```

use anyhow::Result;
use namecheap_core::command::{CreateDomainRequest, encode_set_hosts};
use namecheap_core::records::{DnsPlanRequest, build_dns_plan};
use namecheap_core::{ApiResponse, ClientConfig, NamecheapClient, Service};
use namecheap_transport_http::HttpTransport;
use std::env;
use std::process::ExitCode;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Success
/// - 1: Usage or configuration error
/// - 2: Runtime error (transport failure, unsuccessful response)
#[derive(Debug, Clone, Copy)]
enum CtlExitCode {
    /// Action succeeded
    Success = 0,
    /// Usage or configuration error
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<CtlExitCode> for ExitCode {
    fn from(code: CtlExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Requested action
#[derive(Debug)]
enum Action {
    Plan { domain: String, ipv4: String },
    SetDns { domain: String, ipv4: String },
    CreateDomain { request_path: String },
}

impl Action {
    /// Parse the command line (program name already skipped)
    fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [action, domain, ipv4] if action == "plan" => Ok(Action::Plan {
                domain: domain.clone(),
                ipv4: ipv4.clone(),
            }),
            [action, domain, ipv4] if action == "set-dns" => Ok(Action::SetDns {
                domain: domain.clone(),
                ipv4: ipv4.clone(),
            }),
            [action, path] if action == "create-domain" => Ok(Action::CreateDomain {
                request_path: path.clone(),
            }),
            _ => anyhow::bail!(
                "Usage: namecheapctl plan <domain> <ipv4>\n\
                 \x20      namecheapctl set-dns <domain> <ipv4>\n\
                 \x20      namecheapctl create-domain <request.json>"
            ),
        }
    }

    fn needs_credentials(&self) -> bool {
        !matches!(self, Action::Plan { .. })
    }
}

/// Application configuration
struct Config {
    api_user: String,
    api_key: String,
    client_ip: String,
    service: Service,
    dry_run: bool,
    ipv6: String,
    hostname: String,
    acme_challenge: String,
    include_ns: bool,
    include_dmarc: bool,
    only_acme: bool,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            api_user: env::var("NAMECHEAP_API_USER").unwrap_or_default(),
            api_key: env::var("NAMECHEAP_API_KEY").unwrap_or_default(),
            client_ip: env::var("NAMECHEAP_CLIENT_IP").unwrap_or_default(),
            service: Service::from_mode(
                &env::var("NAMECHEAP_SERVICE").unwrap_or_else(|_| "production".to_string()),
            ),
            dry_run: env::var("NAMECHEAP_MODE")
                .unwrap_or_default()
                .to_lowercase()
                == "dry-run",
            ipv6: env::var("NAMECHEAP_IPV6").unwrap_or_default(),
            hostname: env::var("NAMECHEAP_HOSTNAME").unwrap_or_default(),
            acme_challenge: env::var("NAMECHEAP_ACME_CHALLENGE").unwrap_or_default(),
            include_ns: env_flag("NAMECHEAP_INCLUDE_NS", false)?,
            include_dmarc: env_flag("NAMECHEAP_INCLUDE_DMARC", true)?,
            only_acme: env_flag("NAMECHEAP_ONLY_ACME", false)?,
            log_level: env::var("NAMECHEAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration for the requested action
    fn validate(&self, action: &Action) -> Result<()> {
        if action.needs_credentials() {
            self.client_config().validate().map_err(|e| {
                anyhow::anyhow!(
                    "{}. Set NAMECHEAP_API_USER, NAMECHEAP_API_KEY and NAMECHEAP_CLIENT_IP",
                    e
                )
            })?;
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "NAMECHEAP_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(
            self.api_user.clone(),
            self.api_key.clone(),
            self.client_ip.clone(),
            self.service,
        )
    }

    fn plan_request(&self, domain: &str, ipv4: &str) -> DnsPlanRequest {
        DnsPlanRequest::new(domain, ipv4)
            .with_ipv6(self.ipv6.clone())
            .with_hostname(self.hostname.clone())
            .with_acme_challenge(self.acme_challenge.clone())
            .with_include_ns(self.include_ns)
            .with_include_dmarc(self.include_dmarc)
            .with_only_acme(self.only_acme)
    }
}

/// Parse a boolean environment variable
fn env_flag(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("{} must be a boolean. Got: '{}'", name, other),
        },
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let action = match Action::from_args(&args) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate(&action) {
        eprintln!("Configuration validation error: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CtlExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run(action, config).await {
            Ok(code) => code,
            Err(e) => {
                error!("{}", e);
                CtlExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Run one action and print its result
async fn run(action: Action, config: Config) -> Result<CtlExitCode> {
    match action {
        Action::Plan { domain, ipv4 } => {
            let plan = build_dns_plan(&config.plan_request(&domain, &ipv4))?;
            debug!("setHosts payload: {}", encode_set_hosts(&plan).encode());
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(CtlExitCode::Success)
        }
        Action::SetDns { domain, ipv4 } => {
            let client = build_client(&config)?;
            info!("Replacing host records of {}", domain);
            let response = client.set_dns(&config.plan_request(&domain, &ipv4)).await?;
            Ok(report(&response))
        }
        Action::CreateDomain { request_path } => {
            let raw = std::fs::read_to_string(&request_path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", request_path, e))?;
            let request: CreateDomainRequest = serde_json::from_str(&raw)?;

            let client = build_client(&config)?;
            info!("Registering {} for {} year(s)", request.domain, request.years);
            let response = client.create_domain(&request).await?;
            Ok(report(&response))
        }
    }
}

fn build_client(config: &Config) -> Result<NamecheapClient> {
    if config.dry_run {
        warn!("Running in DRY-RUN mode - no changes will be made");
    }
    let transport = HttpTransport::with_mode(config.dry_run)?;
    Ok(NamecheapClient::new(config.client_config(), Box::new(transport))?)
}

fn report(response: &ApiResponse) -> CtlExitCode {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to render response: {}", e),
    }

    if response.is_success() {
        CtlExitCode::Success
    } else {
        CtlExitCode::RuntimeError
    }
}
