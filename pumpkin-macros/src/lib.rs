use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, LitStr};

extern crate proc_macro;

/// Attaches a Bedrock packet id to a packet the server sends us.
#[proc_macro_attribute]
pub fn client_packet(input: TokenStream, item: TokenStream) -> TokenStream {
    packet_id_impl(input, item, quote!(crate::packet_id::ClientPacketID))
}

/// Attaches a Bedrock packet id to a packet we send to the server.
#[proc_macro_attribute]
pub fn server_packet(input: TokenStream, item: TokenStream) -> TokenStream {
    packet_id_impl(input, item, quote!(crate::packet_id::ServerPacketID))
}

fn packet_id_impl(
    input: TokenStream,
    item: TokenStream,
    packet_trait: proc_macro2::TokenStream,
) -> TokenStream {
    let ast: syn::DeriveInput = match syn::parse(item.clone()) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    let id: LitInt = match syn::parse(input) {
        Ok(id) => id,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();

    let item: proc_macro2::TokenStream = item.into();

    let gen = quote! {
        #item
        impl #impl_generics #packet_trait for #name #ty_generics {
            const PACKET_ID: u32 = #id;
        }
    };

    gen.into()
}

/// Names the block a container block implementation handles, e.g.
/// `#[container_block("minecraft:chest")]`.
#[proc_macro_attribute]
pub fn container_block(input: TokenStream, item: TokenStream) -> TokenStream {
    let ast: syn::DeriveInput = match syn::parse(item.clone()) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    let name: LitStr = match syn::parse(input) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error().into(),
    };
    let value = name.value();
    let Some((namespace, id)) = value.split_once(':') else {
        return syn::Error::new(name.span(), "expected a namespaced block name")
            .to_compile_error()
            .into();
    };

    let ident = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let item: proc_macro2::TokenStream = item.into();

    let gen = quote! {
        #item
        impl #impl_generics crate::block::BlockMetadata for #ident #ty_generics {
            const NAMESPACE: &'static str = #namespace;
            const ID: &'static str = #id;
        }
    };

    gen.into()
}
