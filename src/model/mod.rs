/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP transport trait and the default reqwest implementation
pub mod http;
/// Request models
pub mod requests;
/// Response models
pub mod responses;
