// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macro for GML schema object types.
//!
//! `#[derive(SchemaObject)]` implements the `Schema` and `SchemaObject` traits
//! of the `gml311` crate for a struct whose fields are property slots. Every
//! field becomes a feature. Feature ids continue the numbering of the base
//! type, which must be the field marked `#[gml(base)]`. A typed `Key`
//! constant is added for each own field.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone, Debug, Default, SchemaObject)]
//! #[gml(namespace = "gml", element = "BoundedBy")]
//! pub struct BoundingShapeType {
//!     pub envelope_group: Choice,
//!     #[gml(group = envelope_group, element = "Envelope")]
//!     pub envelope: Member<EnvelopeType>,
//!     #[gml(group = envelope_group, substitutes = envelope, element = "EnvelopeWithTimePeriod")]
//!     pub envelope_with_time_period: Member<EnvelopeWithTimePeriodType>,
//!     #[gml(element = "Null")]
//!     pub null: Attribute<Option<String>>,
//! }
//! ```
//!
//! Struct attributes:
//!
//! - `namespace = "gml"`: namespace of the type and default namespace of its
//!   elements (`gml`, `xlink`, `ows`, `wmts`, `xml` or `none`).
//! - `name = "..."`: class name, defaults to the struct name.
//! - `element = "..."`: global element declared with this type.
//! - `abstract`: the class can't be instantiated by the factory.
//! - `pascal_case`: element names default to `UpperCamelCase`.
//!
//! Field attributes:
//!
//! - `base`: the embedded base type.
//! - `attribute` or `attribute = "..."`: the field is an XML attribute.
//! - `element = "..."`: element name, defaults to the field name.
//! - `repeated`: each item of a list value is written as its own element.
//! - `text`: the field holds the simple content of the element.
//! - `namespace = "..."`: namespace of the attribute or element.
//! - `mixed`: the feature map also holds character content.
//! - `group = field`: the field is a member of a choice or feature map.
//! - `substitutes = field`: the member substitutes a head member.

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToUpperCamelCase};
use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr, Type};

#[derive(Default)]
struct ClassAttributes {
    namespace: Option<String>,
    name: Option<String>,
    element: Option<String>,
    is_abstract: bool,
    pascal_case: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Role {
    Attribute,
    Element,
    Repeated,
    Text,
}

enum FieldKind {
    Base,
    Property {
        role: Role,
        mixed: bool,
    },
    Member {
        group: Ident,
        substitutes: Option<Ident>,
    },
}

struct FieldInfo {
    ident: Ident,
    ty: Type,
    kind: FieldKind,
    namespace: Option<String>,
    local: Option<String>,
}

fn parse_class_attributes(input: &DeriveInput) -> syn::Result<ClassAttributes> {
    let mut attributes = ClassAttributes::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("gml") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("namespace") {
                attributes.namespace = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("name") {
                attributes.name = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("element") {
                attributes.element = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("abstract") {
                attributes.is_abstract = true;
            } else if meta.path.is_ident("pascal_case") {
                attributes.pascal_case = true;
            } else {
                return Err(meta.error("unsupported gml type attribute"));
            }
            Ok(())
        })?;
    }

    Ok(attributes)
}

fn parse_field(field: &syn::Field) -> syn::Result<FieldInfo> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "schema objects need named fields"))?;

    let mut base = false;
    let mut role = Role::Element;
    let mut mixed = false;
    let mut namespace = None;
    let mut local = None;
    let mut group = None;
    let mut substitutes = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("gml") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                base = true;
            } else if meta.path.is_ident("attribute") {
                role = Role::Attribute;
                if meta.input.peek(syn::Token![=]) {
                    local = Some(meta.value()?.parse::<LitStr>()?.value());
                }
            } else if meta.path.is_ident("element") {
                if role != Role::Repeated {
                    role = Role::Element;
                }
                local = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("repeated") {
                role = Role::Repeated;
            } else if meta.path.is_ident("text") {
                role = Role::Text;
            } else if meta.path.is_ident("namespace") {
                namespace = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("mixed") {
                mixed = true;
            } else if meta.path.is_ident("group") {
                group = Some(meta.value()?.parse::<Ident>()?);
            } else if meta.path.is_ident("substitutes") {
                substitutes = Some(meta.value()?.parse::<Ident>()?);
            } else {
                return Err(meta.error("unsupported gml field attribute"));
            }
            Ok(())
        })?;
    }

    let kind = if base {
        FieldKind::Base
    } else if let Some(group) = group {
        FieldKind::Member { group, substitutes }
    } else {
        FieldKind::Property { role, mixed }
    };

    Ok(FieldInfo {
        ident,
        ty: field.ty.clone(),
        kind,
        namespace,
        local,
    })
}

fn namespace_path(namespace: &str, span: &Ident) -> syn::Result<TokenStream2> {
    let variant = match namespace {
        "gml" => quote!(Gml),
        "xlink" => quote!(Xlink),
        "ows" => quote!(Ows),
        "wmts" => quote!(Wmts),
        "xml" => quote!(Xml),
        "none" => quote!(None),
        other => {
            return Err(syn::Error::new_spanned(
                span,
                format!("unknown namespace `{other}`"),
            ))
        }
    };
    Ok(quote!(crate::meta::Namespace::#variant))
}

/// Feature name as exposed by the reflective surface.
fn feature_name(ident: &Ident) -> String {
    ident.to_string().to_lower_camel_case()
}

/// Derive macro for implementing the `Schema` and `SchemaObject` traits.
#[proc_macro_derive(SchemaObject, attributes(gml))]
pub fn derive_schema_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let class = parse_class_attributes(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "SchemaObject derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "SchemaObject derive only supports structs",
            ))
        }
    };

    let mut base = None;
    let mut own = Vec::new();
    for field in fields {
        let info = parse_field(field)?;
        if let FieldKind::Base = info.kind {
            if base.is_some() {
                return Err(syn::Error::new_spanned(
                    &info.ident,
                    "only one base type is supported",
                ));
            }
            base = Some(info);
        } else {
            own.push(info);
        }
    }

    let class_name = class.name.clone().unwrap_or_else(|| name.to_string());
    let class_namespace = class.namespace.clone().unwrap_or_else(|| "gml".to_string());
    let namespace = namespace_path(&class_namespace, name)?;

    let base_count = match &base {
        Some(base) => {
            let ty = &base.ty;
            quote!(<#ty as crate::object::Schema>::CLASS.feature_count())
        }
        None => quote!(0usize),
    };

    // Own feature positions by field name, used to resolve group references.
    let position = |ident: &Ident| own.iter().position(|f| &f.ident == ident);

    let mut metas = Vec::new();
    let mut keys = Vec::new();
    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();
    let mut unset_arms = Vec::new();
    let mut is_set_arms = Vec::new();
    let mut insert_arms = Vec::new();
    let mut remove_arms = Vec::new();
    let mut inverse_arms = Vec::new();
    let mut collect = Vec::new();
    let mut remap = Vec::new();

    for (i, field) in own.iter().enumerate() {
        let ident = &field.ident;
        let ty = &field.ty;
        let index = Literal::usize_unsuffixed(i);
        let feature = feature_name(ident);
        let key = format_ident!("{}", ident.to_string().to_shouty_snake_case());

        let role = match &field.kind {
            FieldKind::Property { role, .. } => *role,
            _ => Role::Element,
        };
        let default_namespace = match role {
            Role::Attribute => "none",
            _ => class_namespace.as_str(),
        };
        let field_namespace = namespace_path(
            field.namespace.as_deref().unwrap_or(default_namespace),
            ident,
        )?;
        let local = match (&field.local, role) {
            (Some(local), _) => local.clone(),
            (None, Role::Text) => String::new(),
            (None, Role::Element | Role::Repeated) if class.pascal_case => {
                ident.to_string().to_upper_camel_case()
            }
            (None, _) => feature.clone(),
        };
        let role_path = match role {
            Role::Attribute => quote!(crate::meta::XmlRole::Attribute),
            Role::Element => quote!(crate::meta::XmlRole::Element),
            Role::Repeated => quote!(crate::meta::XmlRole::Repeated),
            Role::Text => quote!(crate::meta::XmlRole::Text),
        };

        let kind = match &field.kind {
            FieldKind::Property { mixed: true, .. } => {
                quote!(crate::meta::PropertyKind::Group { mixed: true, many: true })
            }
            FieldKind::Property { .. } => quote!(<#ty as crate::property::Property>::KIND),
            FieldKind::Member { group, substitutes } => {
                let group_index = position(group).ok_or_else(|| {
                    syn::Error::new_spanned(group, "group field not found")
                })?;
                let head = substitutes.as_ref().unwrap_or(ident);
                let head_index = position(head).ok_or_else(|| {
                    syn::Error::new_spanned(head, "substituted member not found")
                })?;
                let group_index = Literal::usize_unsuffixed(group_index);
                let head_index = Literal::usize_unsuffixed(head_index);
                quote! {
                    crate::meta::PropertyKind::Member {
                        group: crate::meta::FeatureId::new(#base_count + #group_index),
                        head: crate::meta::FeatureId::new(#base_count + #head_index),
                        many: <#ty as crate::property::Slot>::MANY,
                    }
                }
            }
            FieldKind::Base => unreachable!("base fields are split off above"),
        };

        metas.push(quote! {
            crate::meta::FeatureMeta {
                name: #feature,
                xml: crate::meta::XmlName { namespace: #field_namespace, local: #local },
                role: #role_path,
                kind: #kind,
                target: <#ty as crate::property::Slot>::TARGET,
                value_type: <#ty as crate::property::Slot>::VALUE_TYPE,
            }
        });

        let key_doc = format!("Feature id of `{feature}`.");
        keys.push(quote! {
            #[doc = #key_doc]
            pub const #key: crate::object::Key<Self, <#ty as crate::property::Slot>::Value> =
                crate::object::Key::new(crate::meta::FeatureId::new(#base_count + #index));
        });

        match &field.kind {
            FieldKind::Member { group, substitutes } => {
                let head = substitutes.as_ref().unwrap_or(ident);
                let family = own
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| {
                        &f.ident == head
                            || matches!(
                                &f.kind,
                                FieldKind::Member { substitutes: Some(s), .. } if s == head
                            )
                    })
                    .map(|(k, _)| {
                        let k = Literal::usize_unsuffixed(k);
                        quote!(crate::meta::FeatureId::new(#base_count + #k))
                    })
                    .collect::<Vec<_>>();
                let family = quote!(&[#(#family),*]);
                let many = quote!(<#ty as crate::property::Slot>::MANY);

                get_arms.push(quote! {
                    #index => Ok(crate::group::Group::resolve(&self.#group, #family, #many)),
                });
                set_arms.push(quote! {
                    #index => crate::group::Group::set_members(&mut self.#group, feature, #family, value, #many),
                });
                unset_arms.push(quote! {
                    #index => Ok(crate::group::Group::remove_family(&mut self.#group, #family, #many)),
                });
                is_set_arms.push(quote! {
                    #index => Ok(crate::group::Group::contains_family(&self.#group, #family)),
                });
                insert_arms.push(quote! {
                    #index => crate::group::Group::insert_member(&mut self.#group, feature, #family, index, value, #many),
                });
                remove_arms.push(quote! {
                    #index => crate::group::Group::remove_member(&mut self.#group, #family, index, #many),
                });
                inverse_arms.push(quote! {
                    #index => Ok(crate::group::Group::remove_member_child(&mut self.#group, #family, child)),
                });
            }
            _ => {
                get_arms.push(quote! {
                    #index => Ok(crate::property::Property::get_value(&self.#ident)),
                });
                set_arms.push(quote! {
                    #index => crate::property::Property::set_value(&mut self.#ident, value),
                });
                unset_arms.push(quote! {
                    #index => Ok(crate::property::Property::unset_value(&mut self.#ident)),
                });
                is_set_arms.push(quote! {
                    #index => Ok(crate::property::Property::is_set(&self.#ident)),
                });
                insert_arms.push(quote! {
                    #index => crate::property::Property::insert_value(&mut self.#ident, index, value),
                });
                remove_arms.push(quote! {
                    #index => crate::property::Property::remove_value(&mut self.#ident, index),
                });
                inverse_arms.push(quote! {
                    #index => Ok(crate::property::Property::remove_child(&mut self.#ident, child)),
                });
                collect.push(quote! {
                    crate::property::Property::collect_children(
                        &self.#ident,
                        crate::meta::FeatureId::new(#base_count + #index),
                        out,
                    );
                });
                remap.push(quote! {
                    crate::property::Property::remap_children(&mut self.#ident, map);
                });
            }
        }
    }

    let element = match &class.element {
        Some(element) => quote!(Some(#element)),
        None => quote!(None),
    };
    let is_abstract = class.is_abstract;
    let create = if is_abstract {
        quote!(None)
    } else {
        quote!(Some(crate::object::create_boxed::<Self>))
    };

    let base_class = match &base {
        Some(base) => {
            let ty = &base.ty;
            quote!(Some(<#ty as crate::object::Schema>::CLASS))
        }
        None => quote!(None),
    };

    // Dispatch below the base count goes to the embedded base object.
    let delegate = |call: fn(&Ident) -> TokenStream2| match &base {
        Some(base) => {
            let call = call(&base.ident);
            quote! {
                if feature.index() < #base_count {
                    return crate::object::SchemaObject::#call;
                }
            }
        }
        None => quote!(),
    };
    let base_get = delegate(|b| quote!(get(&self.#b, feature)));
    let base_set = delegate(|b| quote!(basic_set(&mut self.#b, feature, value)));
    let base_unset = delegate(|b| quote!(basic_unset(&mut self.#b, feature)));
    let base_is_set = delegate(|b| quote!(is_set(&self.#b, feature)));
    let base_insert = delegate(|b| quote!(basic_insert(&mut self.#b, feature, index, value)));
    let base_remove = delegate(|b| quote!(basic_remove(&mut self.#b, feature, index)));
    let base_inverse = delegate(|b| quote!(inverse_remove(&mut self.#b, feature, child)));
    let base_collect = base.as_ref().map(|base| {
        let ident = &base.ident;
        quote!(crate::object::SchemaObject::contents(&self.#ident, out);)
    });
    let base_remap = base.as_ref().map(|base| {
        let ident = &base.ident;
        quote!(crate::object::SchemaObject::remap_children(&mut self.#ident, map);)
    });

    let unknown = quote! {
        _ => Err(crate::error::Error::UnknownFeature { class: #class_name, feature }),
    };

    Ok(quote! {
        impl #name {
            #(#keys)*
        }

        impl crate::object::Schema for #name {
            const CLASS: &'static crate::meta::Class = &crate::meta::Class {
                name: #class_name,
                namespace: #namespace,
                element: #element,
                is_abstract: #is_abstract,
                base: #base_class,
                features: &[#(#metas),*],
                create: #create,
            };
        }

        #[allow(unused_variables)]
        impl crate::object::SchemaObject for #name {
            fn class(&self) -> &'static crate::meta::Class {
                <Self as crate::object::Schema>::CLASS
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn crate::object::SchemaObject> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            fn get(
                &self,
                feature: crate::meta::FeatureId,
            ) -> ::core::result::Result<crate::value::Value, crate::error::Error> {
                #base_get
                match feature.index() - #base_count {
                    #(#get_arms)*
                    #unknown
                }
            }

            fn basic_set(
                &mut self,
                feature: crate::meta::FeatureId,
                value: crate::value::Value,
            ) -> ::core::result::Result<crate::property::Previous, crate::error::Error> {
                #base_set
                match feature.index() - #base_count {
                    #(#set_arms)*
                    #unknown
                }
            }

            fn basic_unset(
                &mut self,
                feature: crate::meta::FeatureId,
            ) -> ::core::result::Result<crate::property::Previous, crate::error::Error> {
                #base_unset
                match feature.index() - #base_count {
                    #(#unset_arms)*
                    #unknown
                }
            }

            fn is_set(
                &self,
                feature: crate::meta::FeatureId,
            ) -> ::core::result::Result<bool, crate::error::Error> {
                #base_is_set
                match feature.index() - #base_count {
                    #(#is_set_arms)*
                    #unknown
                }
            }

            fn basic_insert(
                &mut self,
                feature: crate::meta::FeatureId,
                index: ::core::option::Option<usize>,
                value: crate::value::Value,
            ) -> ::core::result::Result<usize, crate::error::Error> {
                #base_insert
                match feature.index() - #base_count {
                    #(#insert_arms)*
                    #unknown
                }
            }

            fn basic_remove(
                &mut self,
                feature: crate::meta::FeatureId,
                index: usize,
            ) -> ::core::result::Result<crate::value::Value, crate::error::Error> {
                #base_remove
                match feature.index() - #base_count {
                    #(#remove_arms)*
                    #unknown
                }
            }

            fn inverse_remove(
                &mut self,
                feature: crate::meta::FeatureId,
                child: crate::model::NodeId,
            ) -> ::core::result::Result<::core::option::Option<usize>, crate::error::Error> {
                #base_inverse
                match feature.index() - #base_count {
                    #(#inverse_arms)*
                    #unknown
                }
            }

            fn contents(&self, out: &mut ::std::vec::Vec<(crate::meta::FeatureId, crate::model::NodeId)>) {
                #base_collect
                #(#collect)*
            }

            fn remap_children(&mut self, map: &mut dyn FnMut(crate::model::NodeId) -> crate::model::NodeId) {
                #base_remap
                #(#remap)*
            }
        }
    })
}
