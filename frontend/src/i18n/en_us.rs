pub mod common {
    pub const BRAND: &str = "GitLogs";
    pub const LOADING: &str = "Loading...";
}

pub mod header {
    pub const HOME: &str = "Home";
    pub const DASHBOARD: &str = "Dashboard";
    pub const ADMIN: &str = "Admin";
    pub const TERMS: &str = "Terms";
    pub const SIGN_IN: &str = "Sign in";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const NOTICE_TITLE: &str = "Notice";
    pub const CLOSE_ARIA: &str = "Dismiss message";
}

pub mod result {
    pub const SUCCESS: &str = "Success";
    pub const ERROR: &str = "Error";
}

pub mod admin {
    pub const TITLE: &str = "Admin Dashboard";
    pub const SUBTITLE: &str = "Bind OG posts, manage users and repositories, and watch worker health.";
    pub const MODE_USER: &str = "User";
    pub const MODE_ADMIN: &str = "Admin";
    pub const MODE_ARIA: &str = "Dashboard mode";
    pub const LOCKED_TITLE: &str = "Sign in required";
    pub const LOCKED_BODY: &str = "Sign in with GitHub before opening the admin dashboard.";
    pub const LOCKED_LOGIN: &str = "Sign in";
    pub const LOCKED_HOME: &str = "Back to home";
    pub const USER_MODE_TITLE: &str = "You are in User mode";
    pub const USER_MODE_BODY: &str =
        "Switch to Admin mode and add your API key to manage OG posts, users and repositories.";
    pub const API_KEY_LABEL: &str = "Admin API key";
    pub const API_KEY_PLACEHOLDER: &str = "x-api-key";
    pub const SHOW_KEY: &str = "Show";
    pub const HIDE_KEY: &str = "Hide";
    pub const SAVE_KEY: &str = "Save";
    pub const KEY_MISSING: &str = "Add your API key to enable admin actions.";
    pub const OVERVIEW_STATUS: &str = "Status";
    pub const OVERVIEW_QUEUE: &str = "Queue";
    pub const OVERVIEW_PROCESSING: &str = "Processing";
    pub const OVERVIEW_RATE_LIMIT: &str = "Rate limit";
}

pub mod og_posts {
    pub const TITLE: &str = "OG Post";
    pub const HINT: &str = "Every commit summary tweet for the repository quotes this tweet.";
    pub const REPO_LABEL: &str = "Repository";
    pub const REPO_PLACEHOLDER: &str = "owner/repo";
    pub const TWEET_LABEL: &str = "Tweet ID";
    pub const TWEET_PLACEHOLDER: &str = "1234567890123456789";
    pub const SET: &str = "Set OG Post";
    pub const GET: &str = "Get OG Post";
}

pub mod users {
    pub const UPSERT_TITLE: &str = "Create or update user";
    pub const USER_ID: &str = "User ID";
    pub const GITHUB_USERNAME: &str = "GitHub username";
    pub const DISPLAY_NAME: &str = "Display name";
    pub const EMAIL: &str = "Email";
    pub const TIER: &str = "Tier";
    pub const UPSERT: &str = "Save User";
    pub const LOOKUP_TITLE: &str = "Look up user";
    pub const LOOKUP: &str = "Look Up";
}

pub mod repos {
    pub const ADD_TITLE: &str = "Add repository";
    pub const USER_ID: &str = "User ID";
    pub const REPO: &str = "Repository";
    pub const REPO_PLACEHOLDER: &str = "owner/repo";
    pub const WEBHOOK_SECRET: &str = "Webhook secret (optional)";
    pub const ADD: &str = "Add Repository";
    pub const CONTEXT_TITLE: &str = "Repository context";
    pub const CONTEXT: &str = "Get Context";
    pub const LIST_TITLE: &str = "User repositories";
    pub const LIST: &str = "List Repositories";
    pub const COL_REPO: &str = "Repository";
    pub const COL_ACTIVE: &str = "Active";
    pub const COL_CREATED: &str = "Created";
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
    pub const EMPTY: &str = "No repositories found.";
}

pub mod stats {
    pub const STATS_TITLE: &str = "Stats";
    pub const HEALTH_TITLE: &str = "Health";
    pub const REFRESH_STATS: &str = "Refresh Stats";
    pub const REFRESH_HEALTH: &str = "Refresh Health";
    pub const NO_DATA: &str = "No data yet.";
}

pub mod dashboard {
    pub const TITLE: &str = "Your Dashboard";
    pub const GREETING_TEMPLATE: &str = "Signed in as {}";
    pub const SIGNED_OUT: &str = "You are not signed in.";
    pub const SIGN_IN: &str = "Sign in with GitHub";
    pub const REPOS_TITLE: &str = "Monitored repositories";
    pub const ADD_PLACEHOLDER: &str = "owner/repo";
    pub const ADD: &str = "Add";
    pub const REMOVE: &str = "Remove";
    pub const EMPTY: &str = "You are not monitoring any repositories yet.";
    pub const LOGOUT: &str = "Log out";
}

pub mod login {
    pub const TITLE: &str = "Sign in to GitLogs";
    pub const BODY: &str = "GitLogs turns your commits into tweets. Sign in with GitHub to pick the repositories to follow.";
    pub const GITHUB: &str = "Continue with GitHub";
    pub const ALREADY: &str = "You are already signed in.";
    pub const GO_DASHBOARD: &str = "Go to dashboard";
}

pub mod home {
    pub const TITLE: &str = "GitLogs";
    pub const TAGLINE: &str = "Your commit history, summarised and posted for you.";
    pub const CTA_LOGIN: &str = "Get started";
    pub const CTA_DASHBOARD: &str = "Open dashboard";
}

pub mod terms {
    pub const TITLE: &str = "Terms of Service";
    pub const SECTIONS: &[(&str, &str)] = &[
        (
            "Service",
            "GitLogs reads commit metadata from repositories you connect and publishes summaries to your linked accounts.",
        ),
        (
            "Your data",
            "We store your GitHub identity and the list of repositories you monitor. Remove a repository at any time from your dashboard.",
        ),
        (
            "Acceptable use",
            "Do not connect repositories you are not allowed to publish about.",
        ),
    ];
}

pub mod not_found {
    pub const TITLE: &str = "404";
    pub const BODY: &str = "This page does not exist.";
    pub const BACK: &str = "Back to home";
}
