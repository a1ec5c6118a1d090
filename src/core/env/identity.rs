use std::ffi::CStr;

const HOST_NAME_MAX: usize = 256;

/// Login name of the terminal user, falling back to `$USER`.
pub fn username() -> Option<String> {
    pick_username(login_name(), std::env::var("USER").ok())
}

fn login_name() -> Option<String> {
    let name = unsafe { libc::getlogin() };
    if name.is_null() {
        return None;
    }
    // getlogin hands out static storage; copy it before anything else runs.
    let name = unsafe { CStr::from_ptr(name) };
    Some(name.to_string_lossy().into_owned())
}

fn pick_username(login: Option<String>, user_var: Option<String>) -> Option<String> {
    login
        .filter(|name| !name.is_empty())
        .or_else(|| user_var.filter(|name| !name.is_empty()))
}

pub fn hostname() -> Option<String> {
    let mut buf = [0 as libc::c_char; HOST_NAME_MAX + 1];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr(), HOST_NAME_MAX) };
    if rc != 0 {
        return None;
    }
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
    Some(name.to_string_lossy().into_owned())
}

/// Name of the user with `uid`, if the password database knows it.
pub fn user_name_of(uid: libc::uid_t) -> Option<String> {
    let pwd = unsafe { libc::getpwuid(uid) };
    if pwd.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr((*pwd).pw_name) };
    Some(name.to_string_lossy().into_owned())
}

pub fn group_name_of(gid: libc::gid_t) -> Option<String> {
    let grp = unsafe { libc::getgrgid(gid) };
    if grp.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr((*grp).gr_name) };
    Some(name.to_string_lossy().into_owned())
}
