// ============================================================================
// CONSTANTS - Fixed keys, defaults and operator-facing messages
// ============================================================================

/// Collection endpoint used when API_BASE_URL is not configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/student";

pub const DEFAULT_LOGIN_STATUS_CLEAR_MS: u32 = 2000;
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 3000;

/// localStorage key of the durable "logged in" flag
pub const AUTH_FLAG_KEY: &str = "isLoggedIn";
pub const AUTH_FLAG_VALUE: &str = "true";

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

pub const MSG_LOGIN_SUCCESS: &str = "✅ Login successful!";
pub const MSG_LOGIN_FAILED: &str = "❌ Invalid credentials! Use username: admin, password: admin";
pub const MSG_LOGOUT: &str = "👋 Logged out successfully!";
pub const MSG_CREATED: &str = "✅ Student added successfully to database!";
pub const MSG_UPDATED: &str = "✅ Student updated successfully in database!";
pub const MSG_DELETED: &str = "✅ Student deleted successfully from database!";
pub const MSG_MISSING_FIELDS: &str = "❌ Please fill in all fields (Name, Email, Branch)";
pub const MSG_CONFIRM_DELETE: &str = "⚠️ Are you sure you want to delete this student from database?";
