pub const FIELD_GROUP: &str = "mb-4";
pub const FIELD_LABEL: &str = "block text-gray-700 text-sm font-bold mb-2";
pub const FIELD_INPUT: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";
pub const FIELD_INVALID: &str = "border-red-500";
pub const TERMS_LABEL: &str = "flex items-center";
pub const TERMS_LINK: &str = "text-primary hover:underline";
pub const SUBMIT_BUTTON: &str = "bg-primary text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline transition-colors duration-200 hover:bg-blue-700";
pub const ERROR_MESSAGE: &str = "text-red-500 text-sm mt-2";
