//! [`SettingsStore`] over `+[NSUserDefaults standardUserDefaults]`.

use crate::error::EngineError;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring};
use crate::storage::SettingsStore;

/// NSUserDefaults-backed settings.
///
/// Must be used from the main thread with a valid autorelease pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDefaultsStore;

unsafe fn user_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

/// Whether a value of any type is stored under `key`.
unsafe fn has_key(ud: id, key: &str) -> bool {
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    obj != nil
}

impl SettingsStore for UserDefaultsStore {
    fn get_int_list(&self, key: &str) -> Option<Vec<i64>> {
        unsafe {
            let ud = user_defaults();
            let k = nsstring(key);
            let array: id = msg_send![ud, arrayForKey: &*k];
            if array == nil {
                return None;
            }
            let number_class = get_class("NSNumber");
            let count: usize = msg_send![array, count];
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                let item: id = msg_send![array, objectAtIndex: i];
                let is_number: bool = msg_send![item, isKindOfClass: number_class];
                if is_number {
                    let v: i64 = msg_send![item, longLongValue];
                    values.push(v);
                }
            }
            Some(values)
        }
    }

    fn set_int_list(&mut self, key: &str, values: &[i64]) -> Result<(), EngineError> {
        unsafe {
            let ud = user_defaults();
            let k = nsstring(key);
            let array: id = msg_send![get_class("NSMutableArray"), arrayWithCapacity: values.len()];
            if array == nil {
                return Err(EngineError::Storage {
                    key: key.to_owned(),
                    reason: "could not allocate NSMutableArray".into(),
                });
            }
            let number_class = get_class("NSNumber");
            for &v in values {
                let n: id = msg_send![number_class, numberWithLongLong: v];
                let _: () = msg_send![array, addObject: n];
            }
            let _: () = msg_send![ud, setObject: array, forKey: &*k];
        }
        Ok(())
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        unsafe {
            let ud = user_defaults();
            if !has_key(ud, key) {
                return None;
            }
            let k = nsstring(key);
            let v: bool = msg_send![ud, boolForKey: &*k];
            Some(v)
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), EngineError> {
        unsafe {
            let ud = user_defaults();
            let k = nsstring(key);
            let _: () = msg_send![ud, setBool: value, forKey: &*k];
        }
        Ok(())
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        unsafe {
            let ud = user_defaults();
            if !has_key(ud, key) {
                return None;
            }
            let k = nsstring(key);
            // NSInteger is i64 on 64-bit macOS
            let v: isize = msg_send![ud, integerForKey: &*k];
            Some(v as i64)
        }
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), EngineError> {
        unsafe {
            let ud = user_defaults();
            let k = nsstring(key);
            let _: () = msg_send![ud, setInteger: value as isize, forKey: &*k];
        }
        Ok(())
    }
}
